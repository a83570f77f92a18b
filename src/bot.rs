use matrix_sdk::config::SyncSettings;
use matrix_sdk::event_handler::Ctx;
use matrix_sdk::ruma::events::room::message::{
    MessageType, OriginalSyncRoomMessageEvent, RoomMessageEventContent,
};
use matrix_sdk::ruma::{RoomId, UserId};
use matrix_sdk::{Client, Room, RoomState};

use crate::dice::ThreadDice;
use crate::fetcher::AnimeListFetcher;
use crate::utils;
use crate::Config;

const PING_COMMAND: &str = "^(p|P)ing";
const ANIME_COMMAND: &str = "^(a|A)nime";

/// A recognized chat command.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Ping,
    Anime,
}

impl Command {
    /// Matches the message body against the known command patterns.
    ///
    /// The patterns are anchored at the start of the body, so at most one
    /// command can be recognized per message.
    pub fn parse(body: &str) -> Option<Self> {
        if utils::matches_pattern(PING_COMMAND, body) {
            Some(Self::Ping)
        } else if utils::matches_pattern(ANIME_COMMAND, body) {
            Some(Self::Anime)
        } else {
            None
        }
    }
}

#[derive(Clone)]
pub struct Bot {
    client: Client,
    room: Room,
    fetcher: AnimeListFetcher,
}

impl Bot {
    pub async fn run(token: String) {
        let config = Config::read();

        let user =
            UserId::parse(config.bot_user_id.as_str()).expect("Unable to parse bot user id");
        let client = Client::builder()
            .homeserver_url(&config.homeserver_url)
            .build()
            .await
            .expect("Unable to create client");

        Self::login(&client, user.localpart(), &token).await;

        let room_id = RoomId::parse(config.room_id.as_str()).expect("Unable to parse room id");
        let room = client.get_room(&room_id).expect("Unable to get room");

        let bot = Self {
            client: client.clone(),
            room,
            fetcher: AnimeListFetcher::new(),
        };

        client.add_event_handler_context(bot);
        client.add_event_handler(Self::on_room_message);

        info!("Bot is now running. Press CTRL-C to exit.");
        tokio::select! {
            result = client.sync(SyncSettings::default()) => {
                if let Err(err) = result {
                    error!("Sync loop failed: {}", err);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Received termination signal, closing session");
            }
        }
    }

    async fn login(client: &Client, user: &str, token: &str) {
        info!("Logging in...");
        let response = client
            .matrix_auth()
            .login_username(user, token)
            .initial_device_display_name("anicobot")
            .send()
            .await
            .expect("Unable to login");

        info!("Do initial sync...");
        client
            .sync_once(SyncSettings::new())
            .await
            .expect("Unable to sync");

        info!(
            "Logged in as {}, got device_id {}",
            response.user_id, response.device_id
        );
    }

    async fn on_room_message(event: OriginalSyncRoomMessageEvent, room: Room, bot: Ctx<Bot>) {
        if room.state() != RoomState::Joined {
            return;
        }
        if room.room_id() != bot.room.room_id() {
            return;
        }
        // Ignore all messages sent by the bot itself.
        if bot.client.user_id() == Some(&*event.sender) {
            return;
        }

        let MessageType::Text(ref text) = event.content.msgtype else {
            return;
        };

        match Command::parse(&text.body) {
            Some(Command::Ping) => bot.ping_pong(&event).await,
            Some(Command::Anime) => bot.anime_capture(&event).await,
            None => {}
        }
    }

    async fn ping_pong(&self, event: &OriginalSyncRoomMessageEvent) {
        info!("ping command from {}", event.sender);
        self.send_message("Pong!").await;
    }

    /// Walks the listing and reports the drawn entry.
    ///
    /// The pages are fetched to completion before anything else is
    /// handled; any failure collapses into a single error notification.
    async fn anime_capture(&self, event: &OriginalSyncRoomMessageEvent) {
        info!("anime command from {}", event.sender);
        self.send_message("Anime!").await;

        let mut dice = ThreadDice;
        match self.fetcher.fetch(&mut dice).await {
            Ok(entry) => {
                let msg = format!("Title:{}\n{}", entry.title, entry.thumbnail);
                self.send_message(&msg).await;
            }
            Err(err) => {
                warn!("Unable to pick a listing entry: {}", err);
                self.send_message("Access Error!").await;
            }
        }
    }

    /// Sends a plain text message to the room. Send failures are logged
    /// and not retried.
    async fn send_message(&self, msg: &str) {
        let content = RoomMessageEventContent::text_plain(msg);
        if let Err(err) = self.room.send(content).await {
            warn!("Unable to send message: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn ping_command() {
        assert_eq!(Command::parse("ping"), Some(Command::Ping));
        assert_eq!(Command::parse("Ping..."), Some(Command::Ping));
        assert_eq!(Command::parse("ping the bot"), Some(Command::Ping));
        assert_eq!(Command::parse("sping"), None);
    }

    #[test]
    fn anime_command() {
        assert_eq!(Command::parse("anime"), Some(Command::Anime));
        assert_eq!(Command::parse("Anime please"), Some(Command::Anime));
        assert_eq!(Command::parse("no anime"), None);
    }

    #[test]
    fn unrelated_text() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("pong"), None);
        assert_eq!(Command::parse("hello there"), None);
    }
}
