//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use edu_core::Route;
use edu_core::model::{Difficulty, Role};

#[derive(Parser, Debug)]
#[command(name = "edu", version, about = "EduAgent learning platform client")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "EDU_API_URL")]
    pub api_url: Option<String>,

    /// File holding the session token [default: ~/.edu-agent/token]
    #[arg(long, env = "EDU_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and save the session token
    Login(LoginArgs),
    /// Sign in to the admin console
    AdminLogin(LoginArgs),
    /// Create an account and save the session token
    Register(RegisterArgs),
    /// Forget the saved session token
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Recommendations and recent quizzes
    Dashboard,
    /// Chat with the tutor; one message per line, `/quit` to end
    Chat {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
    },
    #[command(subcommand)]
    Quiz(QuizCommand),
    #[command(subcommand)]
    Translate(TranslateCommand),
    #[command(subcommand)]
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "EDU_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "EDU_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Repeat of the password
    #[arg(long)]
    pub confirm: String,
    /// Administrator provisioning code, checked by the backend
    #[arg(long)]
    pub admin_code: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum QuizCommand {
    /// List your quizzes
    List,
    /// Show one quiz
    Show { quiz_id: String },
    /// Generate a quiz
    Generate {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
        #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
        difficulty: DifficultyArg,
        /// Comma-separated topics to focus on
        #[arg(long, default_value = "")]
        gaps: String,
    },
    /// Submit answers, e.g. `0,2,,1` (blank = unanswered)
    Submit {
        quiz_id: String,
        #[arg(long)]
        answers: String,
    },
    /// Quizzes and analytics together
    Overview,
}

#[derive(Subcommand, Debug)]
pub enum TranslateCommand {
    /// Translate a piece of text
    Text {
        text: String,
        #[arg(long, default_value = "en")]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Supported languages
    Languages,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    /// Platform totals
    Stats,
    Users,
    SetRole {
        user_id: String,
        #[arg(value_enum)]
        role: RoleArg,
    },
    DeleteUser { user_id: String },
    Quizzes,
    DeleteQuiz { quiz_id: String },
    Sessions,
    DeleteSession { session_id: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RoleArg {
    User,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::User => Self::User,
            RoleArg::Admin => Self::Admin,
        }
    }
}

impl Command {
    /// The view this command stands in for, which decides who may run it.
    /// `None` runs unconditionally.
    pub fn route(&self) -> Option<Route> {
        let route = match self {
            Self::Logout => return None,
            Self::Login(_) => Route::Login,
            Self::AdminLogin(_) => Route::AdminLogin,
            Self::Register(args) if args.admin_code.is_some() => Route::AdminRegister,
            Self::Register(_) => Route::Register,
            Self::Whoami => Route::Profile,
            Self::Dashboard => Route::Dashboard,
            Self::Chat { .. } => Route::Learning,
            Self::Quiz(QuizCommand::Show { quiz_id } | QuizCommand::Submit { quiz_id, .. }) => {
                Route::Quiz(quiz_id.clone())
            }
            Self::Quiz(_) => Route::Quizzes,
            Self::Translate(_) => Route::Translation,
            Self::Admin(AdminCommand::Stats) => Route::Admin,
            Self::Admin(
                AdminCommand::Users | AdminCommand::SetRole { .. } | AdminCommand::DeleteUser { .. },
            ) => Route::AdminUsers,
            Self::Admin(AdminCommand::Quizzes | AdminCommand::DeleteQuiz { .. }) => Route::AdminQuizzes,
            Self::Admin(AdminCommand::Sessions | AdminCommand::DeleteSession { .. }) => {
                Route::AdminSessions
            }
        };
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edu_core::Capability;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("edu").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_commands_map_to_routes() {
        let cli = parse(&["whoami"]);
        assert_eq!(cli.command.route(), Some(Route::Profile));

        let cli = parse(&["quiz", "submit", "q1", "--answers", "0,1"]);
        assert_eq!(cli.command.route(), Some(Route::Quiz("q1".into())));

        let cli = parse(&["admin", "delete-session", "s1"]);
        assert_eq!(cli.command.route().map(|r| r.capability()), Some(Capability::Admin));

        assert_eq!(parse(&["logout"]).command.route(), None);
    }

    #[test]
    fn test_admin_code_switches_register_route() {
        let cli = parse(&[
            "register", "--username", "root", "--email", "r@example.com",
            "--password", "longenough", "--confirm", "longenough", "--admin-code", "X",
        ]);
        assert_eq!(cli.command.route(), Some(Route::AdminRegister));
    }

    #[test]
    fn test_difficulty_defaults_to_medium() {
        let cli = parse(&["quiz", "generate", "--subject", "Math", "--topic", "Algebra"]);
        let Command::Quiz(QuizCommand::Generate { difficulty, .. }) = cli.command else {
            panic!("expected quiz generate");
        };
        assert_eq!(Difficulty::from(difficulty), Difficulty::Medium);
    }
}
