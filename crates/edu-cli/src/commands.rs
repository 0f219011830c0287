//! Command execution
//!
//! Every command is first checked against the route guard using the
//! restored session, exactly as the browser app guards its views.

use anyhow::Context;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use edu_client::{ApiClient, DashboardData, QuizOverview};
use edu_core::model::{
    ChatMessage, ChatRequest, Credentials, QuizRequest, Registration, StartSessionRequest, TranslateRequest, User,
};
use edu_core::{AuthSnapshot, Capability, ClientError, GuardOutcome, Route, guard, validation};

use crate::cli::{AdminCommand, Command, QuizCommand, TranslateCommand};

/// Check `route` against the stored session.
///
/// Returns the signed-in user when the route needed one.
pub async fn authorize(client: &ApiClient, route: &Route) -> Result<Option<User>, ClientError> {
    if route.capability() == Capability::None {
        return Ok(None);
    }

    let user = client.auth().restore().await?;
    // Loading is over once restore returns, so `Pending` cannot occur
    match guard::evaluate(AuthSnapshot::from_user(false, user.as_ref()), route.capability()) {
        GuardOutcome::Render => Ok(user),
        GuardOutcome::Redirect(Route::Login) => Err(ClientError::AccessDenied(
            "Not signed in. Run `edu login` first.".into(),
        )),
        GuardOutcome::Redirect(_) | GuardOutcome::Pending => Err(ClientError::AccessDenied(
            "Administrator access required.".into(),
        )),
    }
}

pub async fn execute(command: Command, client: &ApiClient) -> anyhow::Result<()> {
    let user = match command.route() {
        Some(route) => authorize(client, &route).await?,
        None => None,
    };

    match command {
        Command::Login(args) => {
            let response = client.auth().login(&Credentials::new(args.email, args.password)).await?;
            println!("Signed in as {}", response.user.username);
        }
        Command::AdminLogin(args) => {
            let response = client
                .auth()
                .admin_login(&Credentials::new(args.email, args.password))
                .await?;
            println!("Signed in to the admin console as {}", response.user.username);
        }
        Command::Register(args) => {
            validation::require_text("Username", &args.username)?;
            validation::require_text("Email", &args.email)?;
            validation::check_new_password(&args.password, &args.confirm)?;

            let registration = match args.admin_code {
                Some(code) => Registration::admin(args.username, args.email, args.password, code),
                None => Registration::new(args.username, args.email, args.password),
            };
            let response = client.auth().register(&registration).await?;
            println!("Registered {} ({})", response.user.username, response.user.role);
        }
        Command::Logout => {
            client.auth().logout()?;
            println!("Signed out");
        }
        Command::Whoami => print_json(&user)?,
        Command::Dashboard => print_json(&dashboard_json(&DashboardData::load(client).await?))?,
        Command::Chat { subject, topic } => chat(client, subject, topic).await?,
        Command::Quiz(command) => quiz(client, command).await?,
        Command::Translate(command) => translate(client, command).await?,
        Command::Admin(command) => admin(client, command).await?,
    }
    Ok(())
}

async fn quiz(client: &ApiClient, command: QuizCommand) -> anyhow::Result<()> {
    let quizzes = client.quizzes();
    match command {
        QuizCommand::List => print_json(&quizzes.list().await?),
        QuizCommand::Show { quiz_id } => print_json(&quizzes.get(&quiz_id).await?),
        QuizCommand::Generate { subject, topic, difficulty, gaps } => {
            validation::require_subject_and_topic(&subject, &topic)?;
            let request = QuizRequest {
                subject,
                topic,
                difficulty: difficulty.into(),
                learning_gaps: validation::parse_learning_gaps(&gaps),
            };
            print_json(&quizzes.generate(&request).await?)
        }
        QuizCommand::Submit { quiz_id, answers } => {
            let answers = parse_answers(&answers)?;
            let skipped = validation::unanswered(&answers);
            if skipped > 0 {
                eprintln!("Submitting with {skipped} unanswered question(s)");
            }
            print_json(&quizzes.submit(&quiz_id, answers).await?)
        }
        QuizCommand::Overview => {
            let overview = QuizOverview::load(client).await?;
            print_json(&serde_json::json!({
                "quizzes": overview.quizzes,
                "analytics": overview.analytics,
            }))
        }
    }
}

async fn translate(client: &ApiClient, command: TranslateCommand) -> anyhow::Result<()> {
    let translation = client.translation();
    match command {
        TranslateCommand::Text { text, from, to } => {
            validation::require_text("Text", &text)?;
            let request = TranslateRequest {
                text,
                from_lang: from,
                to_lang: to,
            };
            let translated = translation.translate(&request).await?;
            println!("{}", translated.translated_text);
            Ok(())
        }
        TranslateCommand::Languages => print_json(&translation.languages().await?),
    }
}

async fn admin(client: &ApiClient, command: AdminCommand) -> anyhow::Result<()> {
    let admin = client.admin();
    match command {
        AdminCommand::Stats => print_json(&admin.stats().await?),
        AdminCommand::Users => print_json(&admin.users().await?),
        AdminCommand::SetRole { user_id, role } => print_json(&admin.update_user_role(&user_id, role.into()).await?),
        AdminCommand::DeleteUser { user_id } => print_json(&admin.delete_user(&user_id).await?),
        AdminCommand::Quizzes => print_json(&admin.quizzes().await?),
        AdminCommand::DeleteQuiz { quiz_id } => print_json(&admin.delete_quiz(&quiz_id).await?),
        AdminCommand::Sessions => print_json(&admin.sessions().await?),
        AdminCommand::DeleteSession { session_id } => print_json(&admin.delete_session(&session_id).await?),
    }
}

/// Interactive tutoring session over stdin/stdout
async fn chat(client: &ApiClient, subject: String, topic: String) -> anyhow::Result<()> {
    validation::require_subject_and_topic(&subject, &topic)?;

    let learning = client.learning();
    let started = learning
        .start_session(&StartSessionRequest {
            subject: subject.clone(),
            topic: topic.clone(),
            learning_objectives: Vec::new(),
        })
        .await?;
    tracing::info!(session = %started.session_id, "Learning session started");

    println!("Tutoring {subject} - {topic}. Type /quit to finish.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("reading stdin")? else {
            break;
        };
        let message = line.trim();
        if message == "/quit" {
            break;
        }
        if message.is_empty() {
            continue;
        }

        let request = ChatRequest {
            message: message.to_string(),
            session_id: Some(started.session_id.clone()),
            subject: subject.clone(),
            topic: topic.clone(),
        };
        let reply = match learning.chat(&request).await {
            Ok(reply) => ChatMessage::assistant(reply.response),
            // Quota and transient failures keep the session open
            Err(e) if e.redirect_target().is_none() => ChatMessage::assistant(e.user_message()),
            Err(e) => return Err(e.into()),
        };
        println!("{}\n", reply.content);
    }

    learning.end_session(&started.session_id).await?;
    println!("Session ended");
    Ok(())
}

/// Parse `0,2,,1` into an answer sheet; blank entries are unanswered
pub fn parse_answers(input: &str) -> Result<Vec<Option<usize>>, ClientError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(str::trim)
        .map(|entry| {
            if entry.is_empty() {
                return Ok(None);
            }
            entry
                .parse()
                .map(Some)
                .map_err(|_| ClientError::Validation(format!("Invalid answer index: {entry}")))
        })
        .collect()
}

fn dashboard_json(data: &DashboardData) -> serde_json::Value {
    serde_json::json!({
        "recommendations": data.recommendations,
        "recentQuizzes": data.recent_quizzes,
    })
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
