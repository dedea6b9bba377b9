use othello_agents::{Agent, MinimaxAgent};
use othello_core::{Color, GameState, Match, Move, Square};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand, QueueableCommand,
};
use std::io::{self, Write};
use tracing::{debug, warn};

const HELP: &str = "Use hjkl to move, Enter to place a disc, n for a new game, q to quit";

pub struct InteractiveGame {
    game: Match,
    engine: MinimaxAgent,
    human: Color,
    cursor_pos: (u8, u8), // (row, col)
    message: String,
}

impl InteractiveGame {
    pub fn new(depth: u8, human: Color) -> Self {
        Self {
            game: Self::fresh_match(depth, human),
            engine: MinimaxAgent::with_depth(depth),
            human,
            cursor_pos: (2, 3), // d3
            message: String::from(HELP),
        }
    }

    fn fresh_match(depth: u8, human: Color) -> Match {
        let mut game = Match::new(GameState::new());
        game.register_player("You", human);
        game.register_player(MinimaxAgent::with_depth(depth).name(), human.opponent());
        game
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> io::Result<()> {
        // Engine opens when the human plays White
        self.engine_turns()?;

        loop {
            self.draw_board()?;

            let Event::Key(KeyEvent { code, kind, .. }) = event::read()? else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }

            match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(0, -1),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, 0),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, 0),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(0, 1),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if self.place_disc() {
                        self.engine_turns()?;
                    }
                }
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, dr: i8, dc: i8) {
        let row = self.cursor_pos.0 as i8 + dr;
        let col = self.cursor_pos.1 as i8 + dc;

        if (0..8).contains(&row) && (0..8).contains(&col) {
            self.cursor_pos = (row as u8, col as u8);
        }
    }

    fn cursor_square(&self) -> Option<Square> {
        Square::new(self.cursor_pos.0, self.cursor_pos.1)
    }

    fn state(&self) -> &GameState {
        self.game.state()
    }

    /// Plays the human's disc at the cursor. Returns true if it was legal.
    fn place_disc(&mut self) -> bool {
        if !self.game.is_running() || self.state().turn != self.human {
            return false;
        }
        let Some(square) = self.cursor_square() else {
            return false;
        };

        let legal = self.state().legal_moves();
        match legal.into_iter().find(|m| m.to == square) {
            Some(mv) => match self.game.play(mv) {
                Ok(()) => {
                    self.message = format!("You played {}", mv);
                    true
                }
                Err(err) => {
                    self.message = err.to_string();
                    false
                }
            },
            None => {
                self.message = format!("{} is not a legal move", square);
                false
            }
        }
    }

    /// Lets the engine move until it is the human's turn or play stops.
    /// Passes on either side are applied here.
    fn engine_turns(&mut self) -> io::Result<()> {
        let mut played: Vec<Move> = Vec::new();

        while self.game.is_running() {
            let state = self.state().clone();

            if state.is_game_over() {
                self.game.stop();
                break;
            }

            if state.turn == self.human {
                if state.must_pass() {
                    if let Err(err) = self.game.pass() {
                        warn!(%err, "pass for the human side rejected");
                        self.message = err.to_string();
                        break;
                    }
                    self.message = String::from("You have no move and pass");
                    continue;
                }
                break;
            }

            self.message = String::from("Engine thinking...");
            self.draw_board()?;

            let mut chosen = Vec::with_capacity(1);
            self.engine.make_move(&state, &mut self.game, &mut chosen);

            match chosen.pop() {
                Some(mv) if self.game.is_running() => match self.game.play(mv) {
                    Ok(()) => played.push(mv),
                    Err(err) => {
                        warn!(%err, %mv, "engine move rejected");
                        self.message = format!("Engine move {} rejected: {}", mv, err);
                        break;
                    }
                },
                Some(_) => break,
                None => {
                    if let Err(err) = self.game.pass() {
                        warn!(%err, "engine pass rejected");
                        self.message = err.to_string();
                        break;
                    }
                }
            }
        }

        if !played.is_empty() {
            let names: Vec<String> = played.iter().map(|m| m.to_string()).collect();
            debug!(moves = %names.join(" "), "engine replied");
            self.message = format!("Engine played: {}", names.join(" "));
        }
        if !self.game.is_running() {
            self.message = self.result_line();
        }

        Ok(())
    }

    fn result_line(&self) -> String {
        let state = self.state();
        let (black, white) = (state.disc_count(Color::Black), state.disc_count(Color::White));
        let verdict = match state.winner() {
            Some(color) if color == self.human => "You win",
            Some(_) => "Engine wins",
            None => "Draw",
        };
        format!("Game over: {} ({} X, {} O). Press n for a new game", verdict, black, white)
    }

    fn new_game(&mut self) -> io::Result<()> {
        self.game = Self::fresh_match(self.engine.depth(), self.human);
        self.cursor_pos = (2, 3);
        self.message = String::from("New game started!");
        self.engine_turns()
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        let state = self.state();
        let legal = if state.turn == self.human {
            state.legal_moves()
        } else {
            Vec::new()
        };

        stdout.queue(MoveTo(0, 0))?;
        stdout.queue(Clear(ClearType::FromCursorDown))?;

        stdout.queue(Print("Othello - Interactive Mode (vim keys: hjkl)\r\n"))?;
        stdout.queue(Print(format!("You play {}\r\n\r\n", self.human)))?;
        stdout.queue(Print("  a b c d e f g h  \r\n"))?;
        stdout.queue(Print(" ┌─────────────────┐\r\n"))?;

        for row in 0..8u8 {
            stdout.queue(Print(format!("{}│ ", row + 1)))?;

            for col in 0..8u8 {
                let Some(square) = Square::new(row, col) else {
                    continue;
                };

                let background = if self.cursor_pos == (row, col) {
                    TermColor::Yellow
                } else if legal.iter().any(|m| m.to == square) {
                    TermColor::Blue
                } else {
                    TermColor::DarkGreen
                };
                stdout.queue(SetBackgroundColor(background))?;

                match state.board.piece_at(square) {
                    Some(Color::Black) => {
                        stdout.queue(SetForegroundColor(TermColor::Black))?;
                        stdout.queue(Print("● "))?;
                    }
                    Some(Color::White) => {
                        stdout.queue(SetForegroundColor(TermColor::White))?;
                        stdout.queue(Print("● "))?;
                    }
                    None => {
                        stdout.queue(Print("  "))?;
                    }
                }

                stdout.queue(ResetColor)?;
            }

            stdout.queue(Print(format!("│{}\r\n", row + 1)))?;
        }

        stdout.queue(Print(" └─────────────────┘\r\n"))?;
        stdout.queue(Print("  a b c d e f g h  \r\n\r\n"))?;

        stdout.queue(Print(format!(
            "Black {} | White {} | {} to move\r\n\r\n",
            state.disc_count(Color::Black),
            state.disc_count(Color::White),
            state.turn
        )))?;
        stdout.queue(Print(format!("{}\r\n", self.message)))?;

        stdout.flush()?;
        Ok(())
    }
}
