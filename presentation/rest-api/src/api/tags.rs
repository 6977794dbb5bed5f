use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Barcodes,
    Products,
    Authenticity,
    Verification,
}
