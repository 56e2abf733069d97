use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use interlink_tts::controllers::tts::{InterfaceResponse, LanguagesResponse};
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_languages_in_catalog_order(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: LanguagesResponse = response.json().unwrap();
    assert_eq!(body.languages, vec!["en (English)", "fr (French)"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_first_language(ctx: &TestContext) {
    let response = ctx.client.get("/api/languages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: LanguagesResponse = response.json().unwrap();
    assert_eq!(body.default, "en (English)");
    assert_eq!(body.default, body.languages[0]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_the_interface(ctx: &TestContext) {
    let response = ctx.client.get("/api/interface").await.unwrap();
    response.assert_status(StatusCode::OK);

    let body: InterfaceResponse = response.json().unwrap();
    assert_eq!(body.title, "Interlink AI - Text to Speech");
    assert_eq!(body.description, "Generate high-quality speech from text.");
    assert_eq!(
        body.examples,
        vec![[
            "This is a demo for English.".to_string(),
            "en (English)".to_string()
        ]]
    );
}
