/// Clave de localStorage donde vive el bearer token
pub const STORAGE_KEY_TOKEN: &str = "courier_auth_token";

/// Moneda mostrada junto a los importes
pub const CURRENCY: &str = "৳";

/// Espera antes de volver a la lista tras actualizar un estado
pub const REDIRECT_AFTER_UPDATE_MS: u32 = 1500;
