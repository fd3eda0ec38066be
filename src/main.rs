use std::io::Cursor;
use std::rc::Rc;

use aac::{Board, StderrDiag};

const SAMPLE: &str = "img/food/plate.png food\n\
    >img/food/fries.png french fries\n\
    >img/food/watermelon.png watermelon\n\
    img/clothing/hanger.png clothing\n\
    >img/clothing/shirt.png collared shirt\n";

fn main() {
    let mut board = Board::read_from(Cursor::new(SAMPLE), Rc::new(StderrDiag));

    println!("root menu: {:?}", board.image_locs());
    assert_eq!(
        board.image_locs(),
        ["img/food/plate.png", "img/clothing/hanger.png"]
    );

    assert_eq!(board.select("img/food/plate.png").as_deref(), Ok(""));
    println!("entered category: {}", board.category());
    println!("items: {:?}", board.image_locs());

    let spoken = board
        .select("img/food/fries.png")
        .expect("item is in the category");
    println!("speak: {spoken}");
    assert_eq!(spoken, "french fries");

    board.reset();
    assert_eq!(board.category(), "");

    let mut out = Vec::new();
    board.write_to(&mut out).expect("writing to memory");
    assert_eq!(out, SAMPLE.as_bytes());
    print!("saved:\n{}", String::from_utf8_lossy(&out));
}
