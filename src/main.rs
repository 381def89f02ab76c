use std::io;

use ollama_chat::{ChatConfig, ChatSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let session = ChatSession::new(ChatConfig::default());
    log::debug!("chatting with {} at {}", session.client().model, session.client().chat_url());

    // Unlocked stdout: the progress indicator writes to it from another task.
    session.run(io::stdin().lock(), io::stdout()).await?;
    Ok(())
}
