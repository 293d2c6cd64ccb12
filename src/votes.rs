use log::{info, warn};

use crate::bot::Bot;
use crate::config::TallyMode;
use crate::constants::VOTE_EMOJIS;
use crate::discord::{same_emoji, ChannelMessage, DiscordApi};
use crate::error::FetchResult;
use crate::utils::mention;

/// Per-user vote counts for one emoji, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(String, u32)>,
}

impl Tally {
    pub fn add(&mut self, user_id: &str, votes: u32) {
        if votes == 0 {
            return;
        }

        match self.counts.iter_mut().find(|(user, _)| user == user_id) {
            Some((_, count)) => *count += votes,
            None => self.counts.push((user_id.to_string(), votes)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The user with the most votes. Ties go to whoever was counted first.
    pub fn winner(&self) -> Option<(&str, u32)> {
        let mut best: Option<&(String, u32)> = None;

        for entry in &self.counts {
            if best.map_or(true, |(_, top)| entry.1 > *top) {
                best = Some(entry);
            }
        }

        best.map(|(user, count)| (user.as_str(), *count))
    }
}

#[derive(Debug, Clone)]
pub struct Award {
    pub emoji: &'static str,
    pub title: &'static str,
    pub tally: Tally,
}

/// One tally per voting emoji.
#[derive(Debug, Clone)]
pub struct VoteBoard {
    awards: Vec<Award>,
}

impl Default for VoteBoard {
    fn default() -> Self {
        Self {
            awards: VOTE_EMOJIS
                .iter()
                .map(|&(emoji, title)| Award {
                    emoji,
                    title,
                    tally: Tally::default(),
                })
                .collect(),
        }
    }
}

impl VoteBoard {
    pub fn emojis(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.awards.iter().map(|a| a.emoji)
    }

    /// Credits `user_id` with `votes` for `emoji`. Emoji that are not voted
    /// on are ignored.
    pub fn add(&mut self, emoji: &str, user_id: &str, votes: u32) {
        if let Some(award) = self.awards.iter_mut().find(|a| same_emoji(a.emoji, emoji)) {
            award.tally.add(user_id, votes);
        }
    }

    #[cfg(test)]
    pub fn tally(&self, emoji: &str) -> Option<&Tally> {
        self.awards
            .iter()
            .find(|a| same_emoji(a.emoji, emoji))
            .map(|a| &a.tally)
    }

    pub fn is_empty(&self) -> bool {
        self.awards.iter().all(|a| a.tally.is_empty())
    }

    /// Reactions on every reply to `target`, credited to the reply's author.
    pub fn from_replies(messages: &[ChannelMessage], target: &str) -> Self {
        let mut board = Self::default();

        for reply in messages.iter().filter(|m| m.replies_to(target)) {
            for award in &mut board.awards {
                award
                    .tally
                    .add(&reply.author.id, reply.reaction_count(award.emoji));
            }
        }

        board
    }

    /// Results message, or `None` when nobody voted at all.
    pub fn announcement(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut lines = vec!["🏆 **The votes are in for the last challenge!** 🏆".to_string()];
        for award in &self.awards {
            let result = match award.tally.winner() {
                Some((user, 1)) => format!("{} (1 vote)", mention(user)),
                Some((user, count)) => format!("{} ({count} votes)", mention(user)),
                None => "nobody voted".to_string(),
            };
            lines.push(format!("{} {}: {}", award.emoji, award.title, result));
        }

        Some(lines.join("\n"))
    }
}

impl Bot {
    async fn collect_votes(
        &self,
        api: &DiscordApi,
        channel_id: &str,
        previous_id: &str,
    ) -> FetchResult<VoteBoard> {
        match self.config.tally_mode {
            TallyMode::Replies => {
                let messages = api.get_messages_after(channel_id, previous_id).await?;
                Ok(VoteBoard::from_replies(&messages, previous_id))
            }
            TallyMode::Reactions => {
                let message = api.get_message(channel_id, previous_id).await?;
                let mut board = VoteBoard::default();
                let emojis: Vec<&str> = board.emojis().collect();

                for reaction in &message.reactions {
                    let Some(name) = reaction.emoji.name.as_deref() else {
                        continue;
                    };
                    if !emojis.iter().any(|emoji| same_emoji(emoji, name)) {
                        continue;
                    }

                    let users = api.get_reaction_users(channel_id, previous_id, name).await?;
                    for user in users.iter().filter(|u| !u.bot) {
                        board.add(name, &user.id, 1);
                    }
                }

                Ok(board)
            }
        }
    }

    /// Tallies votes on the previous challenge and posts the winners.
    /// Returns whether an announcement went out.
    pub async fn announce_results(&self, previous_id: &str) -> bool {
        let (Some(api), Some(access)) = (&self.discord, &self.config.bot) else {
            info!("Bot token or channel id not set, skipping vote tally");
            return false;
        };

        let board = match self.collect_votes(api, &access.channel_id, previous_id).await {
            Ok(board) => board,
            Err(e) => {
                warn!("Failed to read votes on message {}: {}", previous_id, e);
                return false;
            }
        };

        let Some(announcement) = board.announcement() else {
            info!("No votes on message {}, skipping announcement", previous_id);
            return false;
        };

        self.send_primary(&announcement, false).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::constants::{FUNNIEST_EMOJI, GAYEST_EMOJI};

    #[test]
    fn winner_is_highest_count() {
        let mut board = VoteBoard::default();
        board.add(GAYEST_EMOJI, "userA", 3);
        board.add(GAYEST_EMOJI, "userB", 1);
        board.add(FUNNIEST_EMOJI, "userC", 2);

        assert_eq!(board.tally(GAYEST_EMOJI).unwrap().winner(), Some(("userA", 3)));
        assert_eq!(board.tally(FUNNIEST_EMOJI).unwrap().winner(), Some(("userC", 2)));
        assert_eq!(Tally::default().winner(), None);
    }

    #[test]
    fn ties_go_to_first_seen() {
        let mut tally = Tally::default();
        tally.add("userB", 2);
        tally.add("userA", 1);
        tally.add("userA", 1);

        assert_eq!(tally.winner(), Some(("userB", 2)));
    }

    #[test]
    fn zero_votes_do_not_register() {
        let mut tally = Tally::default();
        tally.add("userA", 0);
        assert!(tally.is_empty());
        assert_eq!(tally.winner(), None);
    }

    #[test]
    fn other_emoji_are_ignored() {
        let mut board = VoteBoard::default();
        board.add("🔥", "userA", 5);
        assert!(board.is_empty());
        assert!(board.tally("🔥").is_none());
    }

    #[test]
    fn replies_are_credited_to_their_authors() {
        let messages: Vec<ChannelMessage> = serde_json::from_value(serde_json::json!([
            {
                "id": "30",
                "author": {"id": "userA"},
                "message_reference": {"message_id": "10"},
                "reactions": [{"count": 3, "emoji": {"name": GAYEST_EMOJI}}]
            },
            {
                "id": "31",
                "author": {"id": "userC"},
                "message_reference": {"message_id": "10"},
                "reactions": [{"count": 2, "emoji": {"name": FUNNIEST_EMOJI}}]
            },
            {
                "id": "32",
                "author": {"id": "userB"},
                "message_reference": {"message_id": "9"},
                "reactions": [{"count": 9, "emoji": {"name": GAYEST_EMOJI}}]
            },
            {
                "id": "33",
                "author": {"id": "userB"}
            }
        ]))
        .unwrap();

        let board = VoteBoard::from_replies(&messages, "10");

        assert_eq!(board.tally(GAYEST_EMOJI).unwrap().winner(), Some(("userA", 3)));
        assert_eq!(board.tally(FUNNIEST_EMOJI).unwrap().winner(), Some(("userC", 2)));
    }

    #[test]
    fn announcement_mentions_winners() {
        let mut board = VoteBoard::default();
        assert_eq!(board.announcement(), None);

        board.add(GAYEST_EMOJI, "111", 1);
        let text = board.announcement().unwrap();

        assert!(text.contains(&format!("{GAYEST_EMOJI} Gayest response: <@111> (1 vote)")));
        assert!(text.contains(&format!("{FUNNIEST_EMOJI} Funniest response: nobody voted")));
    }
}
