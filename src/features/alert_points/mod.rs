//! Alert points: geotagged hazard markers shown on the map.
//!
//! Points are created and listed only; there is no update or delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/pontos_alerta` | No | List every stored point |
//! | POST | `/api/salvar_ponto` | No | Store a new point |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{AlertPointRepository, SqliteAlertPointRepository};
pub use services::AlertPointService;
