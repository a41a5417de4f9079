use tictactoe_engine::{BOARD_CELLS, Board, CellIndex, GameMode, SessionCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Place(CellIndex),
    Command(SessionCommand),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  0-8        place a mark on that cell (row-major)
  <row> <col> place a mark by row and column (0-2)
  new        start a new game
  reset      reset the score
  mode pvp   two players on this terminal
  mode bot   play X against the bot
  help       show this text
  quit       exit";

pub fn parse_line(line: &str) -> Result<Input, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Err("Enter a cell number, or 'help' for commands".to_string()),
        ["new"] => Ok(Input::Command(SessionCommand::NewGame)),
        ["reset"] => Ok(Input::Command(SessionCommand::ResetScore)),
        ["mode", mode] => parse_mode(mode).map(|mode| Input::Command(SessionCommand::SetMode(mode))),
        ["help" | "?"] => Ok(Input::Help),
        ["quit" | "exit" | "q"] => Ok(Input::Quit),
        [cell] => {
            let index = parse_number(cell)?;
            if index >= BOARD_CELLS {
                return Err(format!("Cell must be between 0 and {}", BOARD_CELLS - 1));
            }
            Ok(Input::Place(index))
        }
        [row, col] => {
            let (row, col) = (parse_number(row)?, parse_number(col)?);
            Board::index_of(row, col)
                .map(Input::Place)
                .ok_or_else(|| format!("No cell at row {} column {}", row, col))
        }
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}

fn parse_mode(mode: &str) -> Result<GameMode, String> {
    match mode {
        "pvp" => Ok(GameMode::PlayerVsPlayer),
        "bot" => Ok(GameMode::VsBot),
        other => Err(format!("Unknown mode '{}', expected 'pvp' or 'bot'", other)),
    }
}

fn parse_number(token: &str) -> Result<usize, String> {
    token
        .parse()
        .map_err(|_| format!("Unknown command '{}'", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_index() {
        assert_eq!(parse_line("4"), Ok(Input::Place(4)));
        assert_eq!(parse_line("  8 "), Ok(Input::Place(8)));
        assert!(parse_line("9").is_err());
    }

    #[test]
    fn test_parse_row_and_column() {
        assert_eq!(parse_line("1 2"), Ok(Input::Place(5)));
        assert!(parse_line("3 0").is_err());
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line("new"), Ok(Input::Command(SessionCommand::NewGame)));
        assert_eq!(parse_line("reset"), Ok(Input::Command(SessionCommand::ResetScore)));
        assert_eq!(
            parse_line("mode pvp"),
            Ok(Input::Command(SessionCommand::SetMode(GameMode::PlayerVsPlayer)))
        );
        assert_eq!(parse_line("quit"), Ok(Input::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("").is_err());
        assert!(parse_line("mode chess").is_err());
        assert!(parse_line("hello").is_err());
        assert!(parse_line("1 2 3").is_err());
    }
}
