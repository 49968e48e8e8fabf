pub mod generate;
pub mod get;

pub enum CommandType {
    Get,
    Generate,
}

impl CommandType {
    pub fn as_str(&self) -> &str {
        match self {
            CommandType::Get => "get",
            CommandType::Generate => "generate",
        }
    }
}
