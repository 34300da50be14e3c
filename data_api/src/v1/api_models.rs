use crate::v1::error::ApiError;
use serde::Deserialize;
use uuid::Uuid;

/// Station form submission. Field names follow the stored columns so the
/// validation messages can point at the exact input.
#[derive(Debug, Clone, Deserialize)]
pub struct StationPayload {
    pub cnpj: String,
    pub ano: String,
    pub numestacao: String,
    pub lat: String,
    pub long: String,
    pub cod_ibge: String,
    pub endereco: String,
    pub abertura: String,
}

/// Link form submission, used for both create and update.
///
/// `geometria_wkt_drawn` carries the live value from the path editor;
/// when present and non-empty it wins over the typed `geometria_wkt`
/// field.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkPayload {
    pub cnpj: String,
    pub ano: String,
    pub estacao_a_id: String,
    pub estacao_b_id: String,
    pub enlace_id: String,
    pub meio: String,
    pub c_nominal: String,
    pub swap: String,
    pub geometria_wkt: String,
    #[serde(default)]
    pub geometria_wkt_drawn: Option<String>,
    pub srid: String,
}

/// A validated link ready for the row store, with station references
/// resolved to ids and the effective geometry picked.
#[derive(Debug, Clone)]
pub struct LinkRecord {
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
}

impl LinkPayload {
    pub fn into_record(self) -> Result<LinkRecord, ApiError> {
        let estacao_a_id = self
            .estacao_a_id
            .parse::<Uuid>()
            .map_err(|_| ApiError::InvalidReference("estacao_a_id"))?;
        let estacao_b_id = self
            .estacao_b_id
            .parse::<Uuid>()
            .map_err(|_| ApiError::InvalidReference("estacao_b_id"))?;

        let geometria_wkt = match self.geometria_wkt_drawn {
            Some(drawn) if !drawn.is_empty() => drawn,
            _ => self.geometria_wkt,
        };

        Ok(LinkRecord {
            cnpj: self.cnpj,
            ano: self.ano,
            estacao_a_id,
            estacao_b_id,
            enlace_id: self.enlace_id,
            meio: self.meio,
            c_nominal: self.c_nominal,
            swap: self.swap,
            geometria_wkt,
            srid: self.srid,
        })
    }
}
