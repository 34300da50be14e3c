//! CSV report building for the list views. Fields are quoted and escaped
//! per RFC 4180, and the download carries a `<entity>_<YYYY-MM-DD>.csv`
//! attachment name.

use crate::v1::db::models::{LinkWithStationsRow, StationRow};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{NaiveDate, Utc};

const STATION_HEADERS: [&str; 8] = [
    "CNPJ",
    "Ano",
    "Estação",
    "Latitude",
    "Longitude",
    "Cód. IBGE",
    "Endereço",
    "Abertura",
];

const LINK_HEADERS: [&str; 8] = [
    "CNPJ",
    "Ano",
    "Estação A",
    "Estação B",
    "ID Enlace",
    "Meio",
    "Cap. Nominal",
    "SWAP",
];

pub fn stations_csv(rows: &[StationRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(STATION_HEADERS)?;
    for row in rows {
        let abertura = display_date(&row.abertura);
        writer.write_record([
            row.cnpj.as_str(),
            row.ano.as_str(),
            row.numestacao.as_str(),
            row.lat.as_str(),
            row.long.as_str(),
            row.cod_ibge.as_str(),
            row.endereco.as_str(),
            abertura.as_str(),
        ])?;
    }
    finish(writer)
}

pub fn links_csv(rows: &[LinkWithStationsRow]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(LINK_HEADERS)?;
    for row in rows {
        writer.write_record([
            row.cnpj.as_str(),
            row.ano.as_str(),
            row.estacao_a_numero.as_str(),
            row.estacao_b_numero.as_str(),
            row.enlace_id.as_str(),
            row.meio.as_str(),
            row.c_nominal.as_str(),
            row.swap.as_str(),
        ])?;
    }
    finish(writer)
}

pub fn csv_download(entity: &str, body: Vec<u8>) -> Response {
    let filename = format!("{entity}_{}.csv", Utc::now().format("%Y-%m-%d"));
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/csv; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

// Opening dates are stored as ISO text but reported as DD/MM/YYYY. Text
// that does not parse as a date passes through unchanged.
fn display_date(value: &str) -> String {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| value.to_owned())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, csv::Error> {
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn station(endereco: &str) -> StationRow {
        StationRow {
            id: Uuid::new_v4(),
            cnpj: "12345678901234".into(),
            ano: "2024".into(),
            numestacao: "ST1".into(),
            lat: "-15.78".into(),
            long: "-47.93".into(),
            cod_ibge: "5300108".into(),
            endereco: endereco.into(),
            abertura: "2024-01-01".into(),
            created_at: Utc::now(),
        }
    }

    fn link() -> LinkWithStationsRow {
        LinkWithStationsRow {
            id: Uuid::new_v4(),
            cnpj: "12345678901234".into(),
            ano: "2024".into(),
            estacao_a_id: Uuid::new_v4(),
            estacao_b_id: Uuid::new_v4(),
            estacao_a_numero: "ST1".into(),
            estacao_b_numero: "ST2".into(),
            enlace_id: "ENL-1".into(),
            meio: "FIBRA".into(),
            c_nominal: "10G".into(),
            swap: "N".into(),
            geometria_wkt: "LINESTRING(0 0,1 1)".into(),
            srid: "4326".into(),
            created_at: Utc::now(),
        }
    }

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn empty_collection_exports_only_the_header() {
        let text = as_text(stations_csv(&[]).unwrap());
        assert_eq!(
            text,
            "CNPJ,Ano,Estação,Latitude,Longitude,Cód. IBGE,Endereço,Abertura\n"
        );
    }

    #[test]
    fn station_row_matches_the_report_layout() {
        let text = as_text(stations_csv(&[station("Rua X")]).unwrap());
        let data_row = text.lines().nth(1).unwrap();
        assert_eq!(
            data_row,
            "12345678901234,2024,ST1,-15.78,-47.93,5300108,Rua X,01/01/2024"
        );
    }

    #[test]
    fn embedded_commas_are_quoted() {
        let text = as_text(stations_csv(&[station("Rua X, 123")]).unwrap());
        let data_row = text.lines().nth(1).unwrap();
        assert!(data_row.contains("\"Rua X, 123\""));
    }

    #[test]
    fn unparseable_opening_date_passes_through() {
        let mut row = station("Rua X");
        row.abertura = "sometime in 2024".into();
        let text = as_text(stations_csv(&[row]).unwrap());
        assert!(text.lines().nth(1).unwrap().ends_with("sometime in 2024"));
    }

    #[test]
    fn link_rows_show_the_joined_station_numbers() {
        let text = as_text(links_csv(&[link()]).unwrap());
        assert_eq!(
            text.lines().next().unwrap(),
            "CNPJ,Ano,Estação A,Estação B,ID Enlace,Meio,Cap. Nominal,SWAP"
        );
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "12345678901234,2024,ST1,ST2,ENL-1,FIBRA,10G,N"
        );
    }

    #[test]
    fn download_response_names_the_file_by_entity_and_date() {
        let response = csv_download("estacoes", Vec::new());
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        let today = Utc::now().format("%Y-%m-%d").to_string();
        assert_eq!(
            disposition,
            format!("attachment; filename=\"estacoes_{today}.csv\"")
        );
    }
}
