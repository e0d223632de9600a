use cognipath_sdk::{
    testing::{MockGenerateResult, MockLanguageModel},
    LanguageModel, LanguageModelError, LanguageModelInput, Message, ModelResponse, Part,
};

fn user_input(text: &str) -> LanguageModelInput {
    LanguageModelInput {
        messages: vec![Message::user([Part::text(text)])],
        ..LanguageModelInput::default()
    }
}

#[tokio::test]
async fn mock_language_model_tracks_inputs_and_returns_results_in_order() {
    let model = MockLanguageModel::new();

    let response1 = ModelResponse {
        content: vec![Part::text("Hello, world!")],
        ..ModelResponse::default()
    };

    model
        .enqueue_generate(response1.clone())
        .enqueue_generate(MockGenerateResult::error(LanguageModelError::InvalidInput(
            "generate error".to_string(),
        )))
        .enqueue_generate(MockGenerateResult::text("Goodbye"));

    let res1 = model
        .generate(user_input("Hi"))
        .await
        .expect("first generate should succeed");
    assert_eq!(res1, response1);

    let err = model
        .generate(user_input("Error"))
        .await
        .expect_err("second generate should error");
    match err {
        LanguageModelError::InvalidInput(msg) => assert_eq!(msg, "generate error"),
        other => panic!("unexpected error variant: {other:?}"),
    }

    let res3 = model
        .generate(user_input("Bye"))
        .await
        .expect("third generate should succeed");
    assert_eq!(res3.text().as_deref(), Some("Goodbye"));

    let tracked = model.tracked_generate_inputs();
    assert_eq!(tracked.len(), 3);
    assert_eq!(tracked[1], user_input("Error"));
}

#[tokio::test]
async fn mock_language_model_errors_when_queue_is_empty() {
    let model = MockLanguageModel::new();

    let err = model
        .generate(user_input("Hi"))
        .await
        .expect_err("empty queue should error");
    assert!(matches!(err, LanguageModelError::Invariant("mock", _)));

    model.restore();
    assert!(model.tracked_generate_inputs().is_empty());
}
