// crates/choromap-core/src/loader/table.rs

//! CSV table parsing for the two tabular sources.

use crate::error::{ChoroError, Result};
use crate::model::{PopulationRow, SummaryRow};
use std::io::Read;
use tracing::{info, trace};

/// Header holding the country name in the world population CSV.
const COUNTRY_COLUMN: &str = "Country Name";
/// The one population year the world map plots.
const POPULATION_COLUMN: &str = "2018";

/// Parses the semicolon-delimited world population CSV, keeping only the
/// country name and the 2018 population.
///
/// The export writes some totals in decimal notation, so values are parsed
/// as f64 and truncated. Rows with an empty or unparseable population cell
/// are skipped.
pub fn population_from_reader(reader: Box<dyn Read>) -> Result<Vec<PopulationRow>> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    let country_idx = column_index(&headers, COUNTRY_COLUMN)?;
    let population_idx = column_index(&headers, POPULATION_COLUMN)?;

    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        let country = record.get(country_idx).unwrap_or("").to_string();
        let cell = record.get(population_idx).unwrap_or("");
        match cell.parse::<f64>() {
            Ok(value) => rows.push(PopulationRow {
                country,
                population: value as u64,
            }),
            Err(_) => trace!(country = %country, cell, "skipping row without a usable population"),
        }
    }

    info!(count = rows.len(), "loaded population table");
    Ok(rows)
}

/// Parses the comma-delimited neighborhood summary CSV. Columns beyond the
/// ones [`SummaryRow`] names are ignored.
pub fn summary_from_reader(reader: Box<dyn Read>) -> Result<Vec<SummaryRow>> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv.deserialize::<SummaryRow>() {
        rows.push(row?);
    }
    info!(count = rows.len(), "loaded neighborhood summary table");
    Ok(rows)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ChoroError::InvalidData(format!("missing CSV column {name:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(s: &str) -> Box<dyn Read> {
        Box::new(std::io::Cursor::new(s.to_string()))
    }

    #[test]
    fn population_keeps_country_and_2018_only() {
        let csv = "\
Country Name;Country Code;2017;2018
Aruba;ABW;105366;105845
Afghanistan;AFG;36296400;37172386
Not A Country;NAC;;
";
        let rows = population_from_reader(reader(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "Aruba");
        assert_eq!(rows[0].population, 105_845);
        assert_eq!(rows[1].population, 37_172_386);
    }

    #[test]
    fn population_missing_column_is_invalid_data() {
        let csv = "Country Name;2017\nAruba;105366\n";
        let err = population_from_reader(reader(csv)).unwrap_err();
        assert!(matches!(err, ChoroError::InvalidData(_)));
    }

    #[test]
    fn summary_rows_deserialize_and_ignore_extra_columns() {
        let csv = "\
year,subdist_no,neighborhood,sale_price_count,sale_price_mean,sale_price_median,sf_mean,price_sf_mean,min_income
2018,1a,Sea Cliff,15,4500000.0,4100000.0,3800.0,1184.2,820000.0
2015,4n,Mount Davidson Manor,22,1500000.0,1450000.0,1900.0,763.1,290000.0
";
        let rows = summary_from_reader(reader(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subdist_no, "1a");
        assert_eq!(rows[0].year, 2018);
        assert_eq!(rows[1].sale_price_median, 1_450_000.0);
    }
}
