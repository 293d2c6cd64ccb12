use log::{error, info, warn};
use rand::Rng;

use crate::category::Category;
use crate::compose::compose;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::corpus::Corpus;
use crate::discord::DiscordApi;
use crate::error::FetchResult;
use crate::giantbomb::fetch_characters;
use crate::history::HistoryStore;
use crate::rotation::RotationStore;
use crate::selector::{Selector, Subjects};
use crate::state::ValueFile;
use crate::textgen::TextGenerator;
use crate::utils::today;

/// What a single run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub category: Category,
    pub question: String,
    pub message_id: Option<String>,
    pub pinned: bool,
    pub announced: bool,
}

pub struct Bot {
    pub config: Config,
    pub corpus: Corpus,
    pub client: reqwest::Client,
    pub discord: Option<DiscordApi>,
    pub textgen: Option<TextGenerator>,
}

impl Bot {
    pub fn new(config: Config, corpus: Corpus) -> FetchResult<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let discord = config
            .bot
            .as_ref()
            .map(|access| DiscordApi::new(client.clone(), &config.discord_api_base, &access.token));

        let textgen = match &config.huggingface_api_key {
            Some(key) => match TextGenerator::new(key, &config.huggingface_api_url) {
                Ok(generator) => Some(generator),
                Err(e) => {
                    warn!("Question generation disabled: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            config,
            corpus,
            client,
            discord,
            textgen,
        })
    }

    /// Runs one challenge cycle: announce the last challenge's winners, post
    /// a new challenge, pin it and remember its id for next time.
    pub async fn run<R: Rng>(&self, rng: &mut R) -> RunReport {
        let last_message = ValueFile::new(self.config.last_message_path());

        let announced = match last_message.read() {
            Some(previous_id) => self.announce_results(&previous_id).await,
            None => {
                info!("No previous challenge recorded, skipping vote tally");
                false
            }
        };

        let rotation = RotationStore::new(ValueFile::new(self.config.rotation_path()));
        let category = rotation.advance(&self.config.rotation);

        let subjects = self.select_subjects(&mut *rng, category).await;
        let question = self.compose_question(&mut *rng, category, &subjects).await;
        let message_id = self.publish_challenge(&question).await;

        let pinned = match &message_id {
            Some(id) => {
                let pinned = self.pin(id).await;
                if let Err(e) = last_message.write(id) {
                    error!(
                        "Failed to save message id to {}: {}",
                        last_message.path().display(),
                        e
                    );
                }
                pinned
            }
            None => {
                warn!("Message ID not found, unable to pin");
                false
            }
        };

        RunReport {
            category,
            question,
            message_id,
            pinned,
            announced,
        }
    }

    async fn game_characters(&self) -> Option<Vec<String>> {
        let Some(key) = &self.config.giantbomb_api_key else {
            info!("GIANTBOMB_API_KEY not set, using local characters");
            return None;
        };

        match fetch_characters(&self.client, &self.config.giantbomb_api_base, key).await {
            Ok(names) => Some(names),
            Err(e) => {
                error!("Giant Bomb API error, using local characters: {}", e);
                None
            }
        }
    }

    async fn select_subjects<R: Rng>(&self, rng: &mut R, category: Category) -> Subjects {
        let external = match category {
            Category::GameCharacter | Category::Crossover => self.game_characters().await,
            Category::Car | Category::Character => None,
        };

        let store = HistoryStore::new(self.config.history_path());
        let mut history = self.config.recency_filter.then(|| store.load());

        let subjects = Selector::new(rng, history.as_mut(), today()).select(
            category,
            &self.corpus,
            external.as_deref(),
        );

        if let Some(history) = &history {
            store.save(history);
        }

        info!("Subjects: {}", subjects.to_vec().join(" x "));
        subjects
    }

    async fn compose_question<R: Rng>(
        &self,
        rng: &mut R,
        category: Category,
        subjects: &Subjects,
    ) -> String {
        let names = subjects.to_vec();

        if let Some(generator) = &self.textgen {
            match generator.question(category, &names).await {
                Ok(text) => return text,
                Err(e) => warn!("Question generation failed, using templates: {}", e),
            }
        }

        compose(rng, &self.corpus, category, subjects).unwrap_or_else(|e| {
            error!("{}", e);
            category.default_question(&names)
        })
    }
}
