//! User-facing response texts. The public API speaks Russian.

pub const MOLECULE_ADDED: &str = "Молекула добавлена";
pub const MOLECULE_UPDATED: &str = "Молекула обновлена успешно";
pub const MOLECULE_DELETED: &str = "Молекула удалена";
pub const MOLECULE_NOT_FOUND: &str = "Молекула не найдена";
pub const MOLECULES_UPLOADED: &str = "Молекулы успешно загружены.";

pub const INVALID_SMILES_PREFIX: &str = "Некорректный SMILES";

pub const UPLOAD_ONLY_JSON: &str = "Только JSON-файлы поддерживаются.";
pub const UPLOAD_EMPTY: &str = "Файл пуст.";
pub const UPLOAD_INVALID_JSON: &str = "Некорректный JSON-файл.";
pub const UPLOAD_NOT_A_LIST: &str = "JSON должен содержать список объектов.";
pub const UPLOAD_MISSING_STRUCTURE: &str = "Каждый объект должен содержать поле 'structure'.";
pub const UPLOAD_NO_FILE: &str = "Файл не передан.";
pub const UPLOAD_TOO_LARGE: &str = "Файл слишком большой.";

pub const INVALID_BODY_PREFIX: &str = "Некорректное тело запроса";
pub const INTERNAL_ERROR: &str = "Внутренняя ошибка сервера";
pub const ROUTE_NOT_FOUND: &str = "Not Found";

/// `Некорректный SMILES: <smiles>`
pub fn invalid_smiles(smiles: &str) -> String {
    format!("{}: {}", INVALID_SMILES_PREFIX, smiles)
}

/// `Некорректное тело запроса: <reason>`
pub fn invalid_body(reason: &str) -> String {
    format!("{}: {}", INVALID_BODY_PREFIX, reason)
}
