use std::{fmt, io};

use dictionary::{words_of, DictionaryError, Gateway, RelationshipType};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::{
    console::Console,
    utilities::{jumble, pick, InvalidArgument},
};

const RULE: &str = "-----------------------------------------------------------------";

#[derive(Debug)]
pub enum GameError {
    InvalidArgument(InvalidArgument),
    Dictionary(DictionaryError),
    Io(io::Error),
    /// A round was attempted before any word was loaded.
    NoSession,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidArgument(error) => error.fmt(f),
            GameError::Dictionary(error) => error.fmt(f),
            GameError::Io(error) => write!(f, "could not talk to the player: {error}"),
            GameError::NoSession => f.write_str("no word has been loaded for this game"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidArgument(error) => Some(error),
            GameError::Dictionary(error) => Some(error),
            GameError::Io(error) => Some(error),
            GameError::NoSession => None,
        }
    }
}

impl From<InvalidArgument> for GameError {
    fn from(error: InvalidArgument) -> Self {
        GameError::InvalidArgument(error)
    }
}

impl From<DictionaryError> for GameError {
    fn from(error: DictionaryError) -> Self {
        GameError::Dictionary(error)
    }
}

impl From<io::Error> for GameError {
    fn from(error: io::Error) -> Self {
        GameError::Io(error)
    }
}

#[derive(Debug)]
pub enum State {
    Start,
    Create,
    /// Shows the puzzle; `randomize: false` repeats what was shown last time.
    Display { randomize: bool },
    Play,
    Choice,
    Hint,
    Quit,
    Error(GameError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Shown {
    definition: Option<String>,
    synonym: Option<String>,
    antonym: Option<String>,
}

#[derive(Debug)]
struct GameSession {
    word: String,
    definitions: Vec<String>,
    synonyms: Vec<String>,
    antonyms: Vec<String>,
    shown: Shown,
}

impl GameSession {
    fn new(
        word: String,
        definitions: Vec<String>,
        synonyms: Vec<String>,
        antonyms: Vec<String>,
    ) -> Self {
        Self {
            word,
            definitions,
            synonyms,
            antonyms,
            shown: Shown::default(),
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Shown, InvalidArgument> {
        Ok(Shown {
            definition: pick(rng, &self.definitions)?.cloned(),
            synonym: pick(rng, &self.synonyms)?.cloned(),
            antonym: pick(rng, &self.antonyms)?.cloned(),
        })
    }

    /// The word itself or any listed synonym wins, except the synonym currently on screen.
    // TODO: decide whether synonyms should win at all; the on-screen exclusion makes
    // a single-synonym word unwinnable through its synonym.
    fn is_correct(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        if self.shown.synonym.as_deref() == Some(answer.as_str()) {
            return false;
        }
        answer == self.word || self.synonyms.contains(&answer)
    }
}

/// One play-through of the guessing game, from the instructions to a quit or an error.
pub struct Game<G, C, R> {
    gateway: G,
    console: C,
    rng: R,
    session: Option<GameSession>,
}

impl<G: Gateway, C: Console, R: Rng> Game<G, C, R> {
    pub fn new(gateway: G, console: C, rng: R) -> Self {
        Self {
            gateway,
            console,
            rng,
            session: None,
        }
    }

    /// Runs states until the game quits. A failing state ends the game with its error.
    #[instrument(skip_all)]
    pub async fn play(&mut self) -> Result<(), GameError> {
        let mut state = State::Start;
        loop {
            debug!(?state, "entering state");
            state = match state {
                State::Quit => {
                    info!("game finished");
                    return Ok(());
                }
                State::Error(error) => {
                    warn!(%error, "game stopped");
                    return Err(error);
                }
                state => self.step(state).await.unwrap_or_else(State::Error),
            };
        }
    }

    async fn step(&mut self, state: State) -> Result<State, GameError> {
        match state {
            State::Start => self.start().await,
            State::Create => self.create().await,
            State::Display { randomize } => self.display(randomize),
            State::Play => self.guess().await,
            State::Choice => self.choice().await,
            State::Hint => self.hint(),
            terminal @ (State::Quit | State::Error(_)) => Ok(terminal),
        }
    }

    async fn start(&mut self) -> Result<State, GameError> {
        self.console
            .say("\n---------------- LET'S PLAY : GUESS THE WORD! ----------------\n");
        self.console
            .ask(
                "Instructions :\n\n\
                 You would be provided with a definition, a synonym or an antonym and you need to guess what the original word is!\n\n\
                 Press Enter to begin!",
            )
            .await?;
        self.console
            .say("\nLoading game data... Please wait for a few seconds\n");
        Ok(State::Create)
    }

    async fn create(&mut self) -> Result<State, GameError> {
        let word = self.gateway.random_word().await?.word;
        let definitions = self
            .gateway
            .definitions(&word)
            .await?
            .into_iter()
            .map(|definition| definition.text)
            .collect::<Vec<String>>();
        let related = self.gateway.related_words(&word).await?;
        let synonyms = words_of(&related, RelationshipType::Synonym);
        let antonyms = words_of(&related, RelationshipType::Antonym);
        debug!(
            %word,
            definitions = definitions.len(),
            synonyms = synonyms.len(),
            antonyms = antonyms.len(),
            "loaded word"
        );
        self.session = Some(GameSession::new(word, definitions, synonyms, antonyms));
        self.console.say(&format!("{RULE}\n"));
        Ok(State::Display { randomize: true })
    }

    fn display(&mut self, randomize: bool) -> Result<State, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        if randomize {
            session.shown = session.draw(&mut self.rng)?;
        }
        let shown = &session.shown;
        self.console.say(&format!(
            "Definition : {}\n",
            shown.definition.as_deref().unwrap_or("(none available)")
        ));
        if let Some(synonym) = &shown.synonym {
            self.console.say(&format!("Synonym : {synonym}\n"));
        }
        if let Some(antonym) = &shown.antonym {
            self.console.say(&format!("Antonym : {antonym}\n"));
        }
        Ok(State::Play)
    }

    async fn guess(&mut self) -> Result<State, GameError> {
        let answer = self.console.ask("Guess the word : ").await?;
        let session = self.session.as_ref().ok_or(GameError::NoSession)?;
        if session.is_correct(&answer) {
            self.console
                .say(&format!("\nYou guessed it correctly! The word is {answer}"));
            Ok(State::Quit)
        } else {
            self.console
                .say(&format!("\nProvided answer {answer} is incorrect!\n"));
            Ok(State::Choice)
        }
    }

    async fn choice(&mut self) -> Result<State, GameError> {
        self.console.say(&format!("{RULE}\n"));
        self.console.say("1 : Try Again\n2 : Get a hint\n3 : Quit\n");
        let choice = self.console.ask("Select an option to proceed : ").await?;
        self.console.say("");
        Ok(match choice.as_str() {
            "1" => State::Display { randomize: false },
            "2" => State::Hint,
            "3" => State::Quit,
            other => {
                self.console
                    .say(&format!("Incorrect choice : {other}. Please try again!\n"));
                State::Choice
            }
        })
    }

    fn hint(&mut self) -> Result<State, GameError> {
        self.console.say(&format!("{RULE}\n"));
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        session.shown = session.draw(&mut self.rng)?;
        let jumbled = jumble(&mut self.rng, &session.word)?;

        let shown = &session.shown;
        let mut hints = Vec::with_capacity(4);
        if let Some(definition) = &shown.definition {
            hints.push(format!("Hint : Another definition : {definition}\n"));
        }
        if let Some(synonym) = &shown.synonym {
            hints.push(format!("Hint : Another Synonym : {synonym}\n"));
        }
        if let Some(antonym) = &shown.antonym {
            hints.push(format!("Hint : Another Antonym : {antonym}\n"));
        }
        if !jumbled.is_empty() {
            hints.push(format!("Hint : Jumbled Word : {jumbled}\n"));
        }
        if let Some(hint) = pick(&mut self.rng, &hints)? {
            self.console.say(hint);
        }
        Ok(State::Play)
    }
}
