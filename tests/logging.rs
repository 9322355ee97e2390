//! Log levels emitted while playing.

use std::io::Cursor;
use std::sync::Mutex;

use blackjack_table::{Card, Deck, Game, GameOptions, Rank, Session, Suit};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Recorder {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder {
    records: Mutex::new(Vec::new()),
};

#[test]
fn rejected_answers_stay_below_the_default_filter() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut game = Game::new(GameOptions::default(), "Avery", 5);
    let mut cards = vec![
        Card::new(Suit::Hearts, Rank::Ten),  // dealer
        Card::new(Suit::Clubs, Rank::Ten),   // player
        Card::new(Suit::Spades, Rank::Nine), // dealer
        Card::new(Suit::Clubs, Rank::Seven), // player
    ];
    cards.reverse();
    game.set_deck(Deck::from_cards(cards));

    let input = "lots\n25\njump\nstay\nmaybe\nn\n";
    let mut session = Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    session.play(&mut game).unwrap();

    let records = RECORDER.records.lock().unwrap();
    let rejected: Vec<_> = records
        .iter()
        .filter(|(_, message)| message.starts_with("rejected"))
        .collect();
    assert_eq!(rejected.len(), 3);
    assert!(rejected.iter().all(|(level, _)| *level == Level::Debug));
    assert!(records.iter().all(|(level, _)| *level > Level::Warn));
}
