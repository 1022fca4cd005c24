use helpful_errors::{
    metadata, variant, BadRequestError, ErrorCode, HelpfulError, Metadata, UnexpectedCodePathError,
};

#[test]
fn variant_default_is_exposed_without_override() {
    assert_eq!(BadRequestError::new("x").code(), Some(ErrorCode::http(400)));
    assert_eq!(UnexpectedCodePathError::new("x").code(), Some(ErrorCode::http(500)));
}

#[test]
fn slug_override_merges_with_default_status() {
    let err = BadRequestError::with_metadata("x", Metadata::new().with_code(ErrorCode::slug("X")));

    assert_eq!(err.code(), Some(ErrorCode { http: Some(400), slug: Some("X".into()) }));
}

#[test]
fn instance_fields_replace_default_fields_exactly() {
    let err = BadRequestError::with_metadata(
        "x",
        Metadata::new().with_code(ErrorCode::http(422).with_slug("Y")),
    );

    assert_eq!(err.code(), Some(ErrorCode { http: Some(422), slug: Some("Y".into()) }));
}

#[test]
fn suppressed_code_hides_variant_default() {
    let err = BadRequestError::with_metadata("x", metadata! { "field": "email" }.without_code());

    assert!(err.code().is_none());
}

#[test]
fn base_variant_exposes_only_instance_code() {
    let plain: HelpfulError = HelpfulError::new("x");
    let coded: HelpfulError =
        HelpfulError::with_metadata("x", Metadata::new().with_code(ErrorCode::slug("CUSTOM")));

    assert!(plain.code().is_none());
    assert_eq!(coded.code(), Some(ErrorCode::slug("CUSTOM")));
}

#[test]
fn code_field_in_metadata_follows_merge_law() {
    let replaced = BadRequestError::with_metadata(
        "x",
        metadata! { "code": { "http": 422, "slug": "Y" }, "a": 1 },
    );
    let merged = BadRequestError::with_metadata("x", metadata! { "code": { "slug": "X" } });

    assert_eq!(replaced.code(), Some(ErrorCode { http: Some(422), slug: Some("Y".into()) }));
    assert_eq!(merged.code(), Some(ErrorCode { http: Some(400), slug: Some("X".into()) }));
    assert_eq!(
        serde_json::to_value(&replaced).unwrap()["code"],
        serde_json::json!({ "http": 422, "slug": "Y" })
    );
}

#[test]
fn null_or_false_code_field_suppresses_default() {
    let nulled = BadRequestError::with_metadata("x", metadata! { "code": null });
    let falsed = BadRequestError::with_metadata("x", Metadata::new().with("code", false));

    assert!(nulled.code().is_none());
    assert!(falsed.code().is_none());
}

#[test]
fn malformed_code_field_is_dropped() {
    let err = BadRequestError::with_metadata("x", metadata! { "code": "teapot", "a": 1 });

    assert_eq!(err.code(), Some(ErrorCode::http(400)));
    assert!(err.metadata().unwrap().get("code").is_none());
}

#[test]
fn empty_override_is_treated_as_absent() {
    let err: HelpfulError = HelpfulError::with_metadata("x", Metadata::new().with_code(ErrorCode::default()));

    assert!(err.code().is_none());
}

variant!(
    /// Declared for the tests below.
    NotFound => "NotFoundError", http = 404, slug = "NOT_FOUND"
);

variant!(MissingInvoice => "MissingInvoiceError", extends = NotFound);

#[test]
fn declared_variant_carries_its_default() {
    let err = HelpfulError::<NotFound>::new("no such user");

    assert_eq!(err.to_string(), "NotFoundError: no such user");
    assert_eq!(err.code(), Some(ErrorCode::http(404).with_slug("NOT_FOUND")));
}

#[test]
fn extended_variant_inherits_default_but_not_prefix() {
    let err = HelpfulError::<MissingInvoice>::with_metadata(
        "invoice gone",
        Metadata::new().with_code(ErrorCode::slug("INVOICE_GONE")),
    );

    assert_eq!(err.to_string(), "MissingInvoiceError: invoice gone");
    assert_eq!(err.code(), Some(ErrorCode::http(404).with_slug("INVOICE_GONE")));
}

#[test]
fn code_is_recomputed_on_every_access() {
    let err = BadRequestError::new("x");

    assert_eq!(err.code(), err.code());
    assert_eq!(err.clone().code(), Some(ErrorCode::http(400)));
}
