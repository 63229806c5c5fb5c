pub const API_BASE_URL: &str = "http://localhost:3333";
pub const IBGE_API_URL: &str =
    "https://servicodados.ibge.gov.br/api/v1/localidades";
