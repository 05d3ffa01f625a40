use super::client::CnpjRegistryClient;
use super::model::{clean_cnpj, format_cnpj, ClientRecord, RegistryCompany};
use super::LookupError;

#[test]
fn clean_strips_mask_characters() {
    assert_eq!(clean_cnpj("11.222.333/0001-81"), "11222333000181");
    assert_eq!(clean_cnpj("  11 222 333 0001 81 "), "11222333000181");
    assert_eq!(clean_cnpj("abc"), "");
}

#[test]
fn format_masks_exactly_fourteen_digits() {
    assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
    // Already-masked input cleans back to 14 digits and is re-masked.
    assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
}

#[test]
fn format_passes_other_lengths_through() {
    assert_eq!(format_cnpj("123"), "123");
    assert_eq!(format_cnpj(""), "");
    assert_eq!(format_cnpj("112223330001811"), "112223330001811");
}

#[test]
fn registry_mapping_fills_missing_fields_with_empty_strings() {
    let payload = r#"{
        "razao_social": "Empresa Exemplo Comércio LTDA",
        "nome_fantasia": null,
        "municipio": "Eunápolis",
        "uf": "BA"
    }"#;
    let company: RegistryCompany = serde_json::from_str(payload).unwrap();
    let record = ClientRecord::from_registry("11222333000181", company);

    assert_eq!(record.cnpj, "11.222.333/0001-81");
    assert_eq!(record.razao_social, "Empresa Exemplo Comércio LTDA");
    // Absent trade name falls back to the legal name.
    assert_eq!(record.nome_fantasia, "Empresa Exemplo Comércio LTDA");
    assert_eq!(record.email, "");
    assert_eq!(record.telefone, "");
    assert_eq!(record.municipio, "Eunápolis");
    assert_eq!(record.uf, "BA");
}

#[test]
fn blank_trade_name_also_falls_back_to_legal_name() {
    let company = RegistryCompany {
        razao_social: Some("Empresa Exemplo LTDA".to_string()),
        nome_fantasia: Some("   ".to_string()),
        ..RegistryCompany::default()
    };
    let record = ClientRecord::from_registry("11222333000181", company);
    assert_eq!(record.nome_fantasia, "Empresa Exemplo LTDA");
}

#[test]
fn client_record_uses_the_frontend_field_names() {
    let company = RegistryCompany {
        razao_social: Some("Empresa Exemplo LTDA".to_string()),
        ..RegistryCompany::default()
    };
    let record = ClientRecord::from_registry("11222333000181", company);
    let json = serde_json::to_string(&record).unwrap();

    assert!(json.contains("\"razaoSocial\""));
    assert!(json.contains("\"nomeFantasia\""));
    assert!(json.contains("\"cnpj\""));
}

#[actix_web::test]
async fn short_identifier_is_rejected_before_any_network_call() {
    // The base URL is unroutable; reaching it would fail loudly. The call
    // must fail on the digit count alone.
    let client = CnpjRegistryClient::new("http://127.0.0.1:1");
    let err = client.lookup("123").await.unwrap_err();
    assert!(matches!(err, LookupError::InvalidIdentifier));
}

#[actix_web::test]
async fn fourteen_digit_identifier_reaches_the_registry() {
    let client = CnpjRegistryClient::new("http://127.0.0.1:1");
    let err = client.lookup("11.222.333/0001-81").await.unwrap_err();
    // Valid shape passes validation and fails only on the dead endpoint.
    assert!(matches!(err, LookupError::LookupFailed(_)));
}
