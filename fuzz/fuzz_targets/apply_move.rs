#![no_main]
use chessrules::{Game, Rules};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        for rules in [Rules::default(), Rules::strict()] {
            let mut game = Game::with_rules(rules);
            game.reset();
            // Every line is a move. Rejected moves must not change anything.
            for m in input.lines() {
                let before = *game.board();
                let player = game.current_player();
                if !game.apply_move(m) {
                    assert_eq!(game.board(), &before);
                    assert_eq!(game.current_player(), player);
                }
            }
        }
    }
});
