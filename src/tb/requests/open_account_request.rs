use crate::ids::TaxId;

#[derive(Debug, Clone, PartialEq)]
pub struct OpenAccountRequest {
    pub tax_id: TaxId,
}
