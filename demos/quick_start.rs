use outcome_rail::capture;
use outcome_rail::prelude::*;

fn parse_port(raw: &str) -> Outcome<u16, String> {
    // Any panic inside the closure becomes a Failure
    capture(|| raw.parse::<u16>().unwrap()).map_failure(|panic| format!("{}", panic))
}

fn describe(outcome: Outcome<u16, String>) -> String {
    outcome.map_or_else(
        |port| format!("listening on port {}", port),
        |error| format!("cannot start: {}", error),
    )
}

fn main() {
    // The default hook would interleave panic reports with the demo output.
    std::panic::set_hook(Box::new(|_| {}));

    println!("Running Quick Start examples...");

    // 1. Basic Combinators
    println!("\n1. Basic Combinators:");
    let doubled = Outcome::<i32, String>::success(21).map(|x| x * 2);
    println!("doubled: {:?}", doubled);

    let recovered = Outcome::<i32, String>::failure("miss".to_string())
        .or_else(|_| Outcome::<i32, String>::success(0))
        .unwrap_or(-1);
    println!("recovered: {}", recovered);

    // 2. Capturing Panics
    println!("\n2. Capturing Panics:");
    println!("{}", describe(parse_port("8000")));
    println!("{}", describe(parse_port("not a port")));

    // 3. The capture! Macro
    println!("\n3. The capture! Macro:");
    let outcome = capture!({
        let raw = "localhost:8000";
        let (_, port) = raw.split_once(':').unwrap();
        port.parse::<u16>().unwrap()
    });
    println!("macro outcome: {:?}", outcome.into_success());

    // 4. Adopting Existing Results
    println!("\n4. Adopting Existing Results:");
    let outcome = "true".parse::<bool>().into_outcome();
    println!("flag: {:?}", outcome.unwrap_or(false));
}
