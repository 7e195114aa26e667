use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::ai::{Composer, Language, prepare_turn};
use crate::core::AppConfig;
use crate::session::{self, Session};
use crate::updates::UpdateNotifier;

pub async fn run(language: &str) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    super::serve::load_dotenv();
    let config = AppConfig::default();
    for var in config.missing_credentials() {
        eprintln!("Warning: missing env var {}", var);
    }
    let composer = Composer::from_config(&config);
    let language = Language::from(language);

    let mut session = Session::new();
    let mut updates = UpdateNotifier::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let timestamp = session::timestamp();
                let turn = prepare_turn(&session, &mut updates, &line, language)?;
                match composer.respond(turn).await {
                    Ok(reply) => {
                        println!("{}", reply);
                        session.record_exchange(&line, &reply, &timestamp);
                    }
                    // Keep the session going, the next message may succeed
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
