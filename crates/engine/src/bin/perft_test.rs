use engine::perft::{run_position_tests, PERFT_POSITIONS};

fn main() {
    // Depth cap keeps a full run in the seconds range; pass a number
    // to go deeper
    let max_depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u32>().ok())
        .or(Some(4));

    println!("🚀 Starting perft tests (max depth {:?})", max_depth.unwrap());

    let mut passed = 0;
    let mut total = 0;

    for position in PERFT_POSITIONS {
        total += 1;
        if run_position_tests(position, max_depth) {
            passed += 1;
        }
    }

    println!("\n📊 Results: {}/{} positions passed", passed, total);

    if passed == total {
        println!("🎉 All tests passed! Move generation is correct.");
    } else {
        println!("❌ Some tests failed. Check move generation.");
        std::process::exit(1);
    }
}
