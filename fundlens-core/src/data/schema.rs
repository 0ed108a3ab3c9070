use csv::StringRecord;

/// Expected columns of the funding CSV.
pub struct FundingSchema;

impl FundingSchema {
    /// Columns every source file must carry. Extra columns are ignored.
    pub const REQUIRED_COLUMNS: [&'static str; 7] = [
        "date",
        "startup",
        "investors",
        "vertical",
        "city",
        "round",
        "amount",
    ];

    /// Validate a header row against the required columns.
    pub fn validate(headers: &StringRecord) -> Result<(), SchemaError> {
        for column in Self::REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(SchemaError::MissingColumn(column.to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
