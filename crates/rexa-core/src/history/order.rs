use crate::record::ConversionRecord;

/// Newest first by `date`; records with equal dates keep their stored order.
pub fn display_order(records: &[ConversionRecord]) -> Vec<&ConversionRecord> {
    let mut ordered: Vec<&ConversionRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}
