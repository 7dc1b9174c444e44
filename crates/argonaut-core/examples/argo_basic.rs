use argonaut_core::{ArgoBackend, ChatBackend, ConversationTurn, ModelArguments};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = ModelArguments::new("argo-default")
        .with_temperature(0.2)
        .with_top_p(0.95);
    let mut backend = ArgoBackend::new(args)?;

    let history = vec![
        ConversationTurn::system("You are a concise assistant."),
        ConversationTurn::user("Name three uses for a mass spectrometer."),
    ];

    match backend.query(&history).await {
        Ok(reply) => println!("Reply: {reply}"),
        Err(e) => eprintln!("Query failed: {e}"),
    }

    let usage = backend.usage();
    println!(
        "Usage: {} input tokens, {} output tokens, ${:.4}",
        usage.total_input_tokens(),
        usage.total_output_tokens(),
        usage.total_cost()
    );

    Ok(())
}
