use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A registered station. Business columns are stored as text, exactly as
/// entered in the form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StationRow {
    pub id: Uuid,
    pub cnpj: String,
    pub ano: String,
    pub numestacao: String,
    pub lat: String,
    pub long: String,
    pub cod_ibge: String,
    pub endereco: String,
    pub abertura: String,
    pub created_at: DateTime<Utc>,
}

/// A registered link between two stations.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LinkRow {
    pub id: Uuid,
    pub cnpj: String,
    pub ano: String,
    pub estacao_a_id: Uuid,
    pub estacao_b_id: Uuid,
    pub enlace_id: String,
    pub meio: String,
    pub c_nominal: String,
    pub swap: String,
    pub geometria_wkt: String,
    pub srid: String,
    pub created_at: DateTime<Utc>,
}

/// Link list row joined with both referenced stations' numbers, as shown
/// in the report table and the CSV export.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LinkWithStationsRow {
    pub id: Uuid,
    pub cnpj: String,
    pub ano: String,
    pub estacao_a_id: Uuid,
    pub estacao_b_id: Uuid,
    pub estacao_a_numero: String,
    pub estacao_b_numero: String,
    pub enlace_id: String,
    pub meio: String,
    pub c_nominal: String,
    pub swap: String,
    pub geometria_wkt: String,
    pub srid: String,
    pub created_at: DateTime<Utc>,
}
