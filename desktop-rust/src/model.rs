use ai_tools_common::{Ticket, ToolError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Article,
    Sentiment,
    Image,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Article, Tab::Sentiment, Tab::Image];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Article => "Article Classification",
            Tab::Sentiment => "Sentiment Analysis",
            Tab::Image => "Image Classification",
        }
    }
}

pub enum UiMessage {
    Completed {
        tab: Tab,
        ticket: Ticket,
        outcome: Result<Vec<u8>, ToolError>,
    },
}

pub struct PreviewData {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}
