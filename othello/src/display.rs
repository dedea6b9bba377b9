use othello_core::{Color, GameState, Square};

pub fn display_board(state: &GameState) {
    let legal = state.legal_moves();

    println!("\n  a b c d e f g h");
    println!("  ---------------");

    for row in 0..8 {
        print!("{} ", row + 1);

        for col in 0..8 {
            let Some(square) = Square::new(row, col) else {
                continue;
            };
            let symbol = match state.board.piece_at(square) {
                Some(color) => color.symbol(),
                None if legal.iter().any(|m| m.to == square) => '*',
                None => '.',
            };
            print!("{} ", symbol);
        }

        println!("| {}", row + 1);
    }

    println!("  ---------------");
    println!("  a b c d e f g h\n");

    println!(
        "X {} - O {}",
        state.disc_count(Color::Black),
        state.disc_count(Color::White)
    );
    if state.is_game_over() {
        println!("Game over");
    } else {
        println!("{} to move", state.turn);
        if !legal.is_empty() {
            let names: Vec<String> = legal.iter().map(|m| m.to_string()).collect();
            println!("Legal moves: {}", names.join(" "));
        }
    }
}
