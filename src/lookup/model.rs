use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"\D").unwrap();
}

/// Strip everything but digits from a raw tax-id input.
pub fn clean_cnpj(raw: &str) -> String {
    NON_DIGITS.replace_all(raw, "").into_owned()
}

/// Apply the display mask `XX.XXX.XXX/XXXX-XX` to a 14-digit CNPJ.
///
/// Anything that does not clean up to exactly 14 digits is returned
/// unmodified, so the helper can run on partial input while the user is
/// still typing.
pub fn format_cnpj(value: &str) -> String {
    let digits = clean_cnpj(value);
    if digits.len() != 14 {
        return value.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

/// Company record produced by a successful registry lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// CNPJ in display form, e.g. `11.222.333/0001-81`.
    #[schema(example = "11.222.333/0001-81")]
    pub cnpj: String,
    #[schema(example = "Empresa Exemplo Comércio LTDA")]
    pub razao_social: String,
    #[schema(example = "Empresa Exemplo")]
    pub nome_fantasia: String,
    pub email: String,
    pub telefone: String,
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub municipio: String,
    pub uf: String,
    pub cep: String,
}

/// Payload shape of the public CNPJ registry (BrasilAPI v1 contract).
///
/// Every field is optional; absent values become empty strings in the
/// mapped record.
#[derive(Debug, Default, Deserialize)]
pub struct RegistryCompany {
    #[serde(default)]
    pub razao_social: Option<String>,
    #[serde(default)]
    pub nome_fantasia: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub ddd_telefone_1: Option<String>,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub numero: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub cep: Option<String>,
}

impl ClientRecord {
    /// Map a registry payload into a client record.
    ///
    /// An absent or blank trade name falls back to the legal name.
    pub fn from_registry(digits: &str, company: RegistryCompany) -> Self {
        let razao_social = company.razao_social.unwrap_or_default();
        let nome_fantasia = match company.nome_fantasia {
            Some(name) if !name.trim().is_empty() => name,
            _ => razao_social.clone(),
        };

        ClientRecord {
            cnpj: format_cnpj(digits),
            razao_social,
            nome_fantasia,
            email: company.email.unwrap_or_default(),
            telefone: company.ddd_telefone_1.unwrap_or_default(),
            logradouro: company.logradouro.unwrap_or_default(),
            numero: company.numero.unwrap_or_default(),
            bairro: company.bairro.unwrap_or_default(),
            municipio: company.municipio.unwrap_or_default(),
            uf: company.uf.unwrap_or_default(),
            cep: company.cep.unwrap_or_default(),
        }
    }
}
