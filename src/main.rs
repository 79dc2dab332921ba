//! KoreanBridge - 한글 연습 도구 (받침 빼고 읽기, 초성 퀴즈)

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use koreanbridge::config::{load_config, save_config, KoreanBridgeConfig};
use koreanbridge::i18n::{translate_or_key, Lang};
use koreanbridge::nav::Route;
use koreanbridge::rewards::Profile;
use koreanbridge::season::Season;
use koreanbridge::{
    disassemble, extract_initial_consonant, BatchimDrill, ChosungQuiz, CoinWallet,
    MemoryProfileStore, QuizOutcome, Session,
};

#[derive(Parser, Debug)]
#[command(name = "koreanbridge", about = "Hangul practice toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Remove final consonants (batchim) from Hangul syllables.
    Batchim {
        /// Text to transform (reads stdin when omitted).
        text: Option<String>,
    },
    /// Replace Hangul syllables with their initial consonants.
    Chosung { text: Option<String> },
    /// Spell Hangul syllables out as individual jamo.
    Jamo { text: Option<String> },
    /// Resolve a location hash to a view and drawer.
    Route { hash: String },
    /// Look up a UI string.
    Translate {
        key: String,
        /// Language code (defaults to the configured language).
        #[arg(long)]
        lang: Option<String>,
    },
    /// Show today's seasonal background.
    Season,
    /// Play one chosung quiz round.
    Quiz { answer: String, guess: String },
    /// Persist the UI language.
    SetLang { code: String },
}

/// 인자 또는 표준 입력에서 텍스트 읽기
fn read_text(text: Option<String>) -> io::Result<String> {
    match text {
        Some(t) => Ok(t),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn run(cli: Cli, config: KoreanBridgeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let lang = config.language();
    match cli.command {
        Command::Batchim { text } => {
            let text = read_text(text)?;
            match BatchimDrill::new(&text) {
                Ok(drill) => println!("{}", drill.practice()),
                Err(_) => eprintln!("{}", translate_or_key(lang, "emptyInput")),
            }
        }
        Command::Chosung { text } => {
            println!("{}", extract_initial_consonant(&read_text(text)?));
        }
        Command::Jamo { text } => {
            println!("{}", disassemble(&read_text(text)?));
        }
        Command::Route { hash } => {
            let route = Route::from_hash(&hash);
            match route.drawer {
                Some(drawer) => println!("view={} drawer={}", route.view.name(), drawer.name()),
                None => println!("view={}", route.view.name()),
            }
        }
        Command::Translate { key, lang: code } => {
            let lang = match code {
                Some(code) => Lang::from_code(&code).unwrap_or_else(|| {
                    log::warn!("지원하지 않는 언어: {}, 영어 사용", code);
                    Lang::En
                }),
                None => lang,
            };
            println!("{}", translate_or_key(lang, &key));
        }
        Command::Season => {
            let season = Season::for_date(chrono::Local::now().date_naive());
            println!("{} {} (next: {})", season.css_class(), season.image(), season.next().image());
        }
        Command::Quiz { answer, guess } => {
            let store = MemoryProfileStore::new();
            store.insert(Profile {
                id: "local".into(),
                coins: config.starting_coins,
            })?;
            let mut wallet = CoinWallet::new(store);
            wallet.sign_in(Session::new("local"));

            let mut quiz = ChosungQuiz::new(answer);
            println!("{}", quiz.hint());
            match quiz.check(&guess) {
                QuizOutcome::Correct => {
                    wallet.earn(config.quiz_reward)?;
                    println!("{}", translate_or_key(lang, "correct"));
                }
                QuizOutcome::Incorrect | QuizOutcome::AlreadySolved => {
                    println!("{}", translate_or_key(lang, "incorrect"));
                }
            }
            println!("{}: {}", translate_or_key(lang, "coins"), wallet.coins());
        }
        Command::SetLang { code } => {
            let Some(new_lang) = Lang::from_code(&code) else {
                return Err(format!("지원하지 않는 언어: {}", code).into());
            };
            let config = KoreanBridgeConfig {
                lang: new_lang.code().to_string(),
                ..config
            };
            save_config(&config)?;
            log::info!("언어 저장: {}", new_lang.code());
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config();

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
