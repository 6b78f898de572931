use payout_instructions::{
    config::PreviewConfig,
    instructions::InstructionsPreview,
    template::{render, VariableMap},
};
use serde_json::json;

#[test]
fn preview_with_structured_account() {
    let account = json!({
        "type": "sort_code",
        "currency": "GBP",
        "isManualBankTransfer": true,
        "accountHolderName": "Open Source Collective",
        "details": {
            "sortCode": "040075",
            "accountNumber": "37618166",
            "address": {
                "firstLine": "Unit 2",
                "city": "London",
                "postCode": "E1 6AN"
            }
        }
    });

    let template = "Please transfer {amount} to:\n{account}\n\nUse reference {Reference} for {collective}.";
    let out = InstructionsPreview::default().render(template, Some(&account));

    let expected = "Please transfer $30 to:\n\
Account Holder Name: Open Source Collective\n\
Sort Code: 040075\n\
Account Number: 37618166\n\
Address: \n\
\x20 Unit 2\n\
\x20 City: London\n\
\x20 Post Code: E1 6AN\n\
\n\
Use reference 76400 for acme.";

    assert_eq!(out, expected);
    assert!(!out.contains("GBP"));
}

#[test]
fn preview_from_json_config() {
    let config = PreviewConfig::from_json(
        r#"{"values": {"amount": "€25", "reference": "1001"}, "formatter": {"labels": {"IBAN": "Account: "}}}"#,
    )
    .expect("config");

    let account = json!({ "IBAN": "DE89370400440532013000" });
    let out = InstructionsPreview::from_config(config)
        .render("{amount} → {account} ({orderid})", Some(&account));

    assert_eq!(out, "€25 → Account: DE89370400440532013000 (1001)");
}

#[test]
fn render_leaves_unknown_placeholders() {
    let vars = VariableMap::new().with("amount", "$5");
    assert_eq!(render("{amount} due {dueDate}", &vars), "$5 due {dueDate}");
}
