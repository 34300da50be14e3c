//! Field-level form validation. Rules and messages mirror the data-entry
//! forms: CNPJ needs 14 characters, the year needs 4, everything else just
//! has to be present, and the link medium must be one of the three known
//! values. Validation failures block the write entirely.

use crate::v1::api_models::{LinkPayload, StationPayload};
use serde::Serialize;
use shared::domain::MediaKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

pub fn station(payload: &StationPayload) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    min_len(&mut errors, "cnpj", &payload.cnpj, 14, "CNPJ deve ter 14 dígitos");
    min_len(&mut errors, "ano", &payload.ano, 4, "Ano deve ter 4 dígitos");
    required(&mut errors, "numestacao", &payload.numestacao, "Número da estação é obrigatório");
    required(&mut errors, "lat", &payload.lat, "Latitude é obrigatória");
    required(&mut errors, "long", &payload.long, "Longitude é obrigatória");
    required(&mut errors, "cod_ibge", &payload.cod_ibge, "Código IBGE é obrigatório");
    required(&mut errors, "endereco", &payload.endereco, "Endereço é obrigatório");
    required(&mut errors, "abertura", &payload.abertura, "Data de abertura é obrigatória");

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

pub fn link(payload: &LinkPayload) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    min_len(&mut errors, "cnpj", &payload.cnpj, 14, "CNPJ deve ter 14 dígitos");
    min_len(&mut errors, "ano", &payload.ano, 4, "Ano deve ter 4 dígitos");
    required(&mut errors, "estacao_a_id", &payload.estacao_a_id, "Estação A é obrigatória");
    required(&mut errors, "estacao_b_id", &payload.estacao_b_id, "Estação B é obrigatória");
    required(&mut errors, "enlace_id", &payload.enlace_id, "ID do enlace é obrigatório");
    if payload.meio.parse::<MediaKind>().is_err() {
        errors.push(FieldError {
            field: "meio",
            message: "Tipo de meio é obrigatório",
        });
    }
    required(&mut errors, "c_nominal", &payload.c_nominal, "Capacidade nominal é obrigatória");
    required(&mut errors, "swap", &payload.swap, "SWAP é obrigatório");
    required(&mut errors, "geometria_wkt", &payload.geometria_wkt, "Geometria WKT é obrigatória");
    required(&mut errors, "srid", &payload.srid, "SRID é obrigatório");

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    message: &'static str,
) {
    min_len(errors, field, value, 1, message);
}

fn min_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    len: usize,
    message: &'static str,
) {
    if value.chars().count() < len {
        errors.push(FieldError { field, message });
    }
}
