//! Typed row-store access, one call per operation. Backend errors are
//! propagated unchanged to the caller.

use crate::v1::api_models::{LinkRecord, StationPayload};
use crate::v1::db::models::{LinkRow, LinkWithStationsRow, StationRow};
use shared::domain::UserRole;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

pub async fn fetch_stations(pool: &Pool<Postgres>) -> Result<Vec<StationRow>, QueryError> {
    let rows = sqlx::query_as(
        r"
        SELECT id, cnpj, ano, numestacao, lat, long, cod_ibge, endereco, abertura, created_at
        FROM stations
        ORDER BY created_at DESC;
        ",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn fetch_station(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<StationRow>, QueryError> {
    let row = sqlx::query_as(
        r"
        SELECT id, cnpj, ano, numestacao, lat, long, cod_ibge, endereco, abertura, created_at
        FROM stations
        WHERE id = $1;
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert_station(
    pool: &Pool<Postgres>,
    station: &StationPayload,
) -> Result<StationRow, QueryError> {
    let row = sqlx::query_as(
        r"
        INSERT INTO stations (cnpj, ano, numestacao, lat, long, cod_ibge, endereco, abertura)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *;
        ",
    )
    .bind(&station.cnpj)
    .bind(&station.ano)
    .bind(&station.numestacao)
    .bind(&station.lat)
    .bind(&station.long)
    .bind(&station.cod_ibge)
    .bind(&station.endereco)
    .bind(&station.abertura)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn fetch_links_with_stations(
    pool: &Pool<Postgres>,
) -> Result<Vec<LinkWithStationsRow>, QueryError> {
    let rows = sqlx::query_as(
        r"
        SELECT
            l.id, l.cnpj, l.ano, l.estacao_a_id, l.estacao_b_id,
            sa.numestacao AS estacao_a_numero,
            sb.numestacao AS estacao_b_numero,
            l.enlace_id, l.meio, l.c_nominal, l.swap,
            l.geometria_wkt, l.srid, l.created_at
        FROM links l
        JOIN stations sa ON sa.id = l.estacao_a_id
        JOIN stations sb ON sb.id = l.estacao_b_id
        ORDER BY l.created_at DESC;
        ",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn fetch_link(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<LinkRow>, QueryError> {
    let row = sqlx::query_as(
        r"
        SELECT id, cnpj, ano, estacao_a_id, estacao_b_id, enlace_id, meio,
               c_nominal, swap, geometria_wkt, srid, created_at
        FROM links
        WHERE id = $1;
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert_link(
    pool: &Pool<Postgres>,
    link: &LinkRecord,
) -> Result<LinkRow, QueryError> {
    let row = sqlx::query_as(
        r"
        INSERT INTO links (cnpj, ano, estacao_a_id, estacao_b_id, enlace_id, meio,
                           c_nominal, swap, geometria_wkt, srid)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *;
        ",
    )
    .bind(&link.cnpj)
    .bind(&link.ano)
    .bind(link.estacao_a_id)
    .bind(link.estacao_b_id)
    .bind(&link.enlace_id)
    .bind(&link.meio)
    .bind(&link.c_nominal)
    .bind(&link.swap)
    .bind(&link.geometria_wkt)
    .bind(&link.srid)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Patches one link scoped to `id`; never inserts. Returns `None` when the
/// id does not exist.
pub async fn update_link(
    pool: &Pool<Postgres>,
    id: Uuid,
    link: &LinkRecord,
) -> Result<Option<LinkRow>, QueryError> {
    let row = sqlx::query_as(
        r"
        UPDATE links
        SET cnpj = $1,
            ano = $2,
            estacao_a_id = $3,
            estacao_b_id = $4,
            enlace_id = $5,
            meio = $6,
            c_nominal = $7,
            swap = $8,
            geometria_wkt = $9,
            srid = $10
        WHERE id = $11
        RETURNING *;
        ",
    )
    .bind(&link.cnpj)
    .bind(&link.ano)
    .bind(link.estacao_a_id)
    .bind(link.estacao_b_id)
    .bind(&link.enlace_id)
    .bind(&link.meio)
    .bind(&link.c_nominal)
    .bind(&link.swap)
    .bind(&link.geometria_wkt)
    .bind(&link.srid)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn fetch_user_role(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<UserRole>, QueryError> {
    let row: Option<(UserRole,)> =
        sqlx::query_as("SELECT role FROM user_roles WHERE user_id = $1;")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(role,)| role))
}
