/// Response message for a stored point
pub const SAVE_SUCCESS_MESSAGE: &str = "Ponto salvo com sucesso!";

// =============================================================================
// ROUTES
// =============================================================================

pub const POINTS_PATH: &str = "/api/pontos_alerta";
pub const SAVE_POINT_PATH: &str = "/api/salvar_ponto";

/// Template rendered at `/`
pub const INDEX_TEMPLATE: &str = "index.html";
