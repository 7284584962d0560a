use crate::bounded_text::BoundedText;
use core::str::Utf8Error;
use thiserror::Error;

/// Size of the team field, terminator included.
pub const TEAM_FIELD_LEN: usize = 32;
/// Size of the message field, terminator included.
pub const MESSAGE_FIELD_LEN: usize = 64;
/// Size of an encoded record on the air.
pub const RECORD_LEN: usize = TEAM_FIELD_LEN + MESSAGE_FIELD_LEN;

pub type TeamName = BoundedText<TEAM_FIELD_LEN>;
pub type MessageText = BoundedText<MESSAGE_FIELD_LEN>;

/// The datagram exchanged between a weather station and the receiver.
///
/// Laid out as two fixed C strings, `team` then `message`, with no header
/// and no padding between them. Receivers written in C read it as
/// `struct { char team[32]; char message[64]; }`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherRecord {
    pub team: TeamName,
    pub message: MessageText,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is {0} bytes, expected {expected}", expected = RECORD_LEN)]
    InvalidLength(usize),
    #[error("team field is not valid UTF-8")]
    Team(Utf8Error),
    #[error("message field is not valid UTF-8")]
    Message(Utf8Error),
}

impl WeatherRecord {
    pub fn new(team: &str, message: &str) -> Self {
        return Self {
            team: TeamName::truncate_from(team),
            message: MessageText::truncate_from(message),
        };
    }

    /// Refills both fields in place.
    pub fn fill(&mut self, team: &TeamName, message: &str) {
        self.team.clone_from(team);
        self.message = MessageText::truncate_from(message);
    }

    pub fn encode(&self) -> [u8; RECORD_LEN] {
        let mut packet = [0u8; RECORD_LEN];
        packet[..TEAM_FIELD_LEN].copy_from_slice(self.team.as_field());
        packet[TEAM_FIELD_LEN..].copy_from_slice(self.message.as_field());
        return packet;
    }

    /// Reads a record received from a station. Trailing bytes beyond
    /// `RECORD_LEN` are ignored.
    pub fn decode(packet: &[u8]) -> Result<Self, RecordError> {
        if packet.len() < RECORD_LEN {
            return Err(RecordError::InvalidLength(packet.len()));
        }
        let team = TeamName::from_field(&packet[..TEAM_FIELD_LEN]).map_err(RecordError::Team)?;
        let message = MessageText::from_field(&packet[TEAM_FIELD_LEN..RECORD_LEN])
            .map_err(RecordError::Message)?;
        return Ok(Self { team, message });
    }
}
