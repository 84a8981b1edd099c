use std::io::{self, BufRead, Write};

use subword_bpe::{BpeTokenizer, Trainer};

const TRAINING_TEXTS: [&str; 7] = [
    "the quick brown fox jumps over the lazy dog",
    "cat chases dog dog chases cat",
    "natural language processing is fascinating",
    "machine learning requires training data",
    "tokenization breaks text into tokens",
    "javascript is a programming language",
    "language models need vocabularies",
];

fn main() -> io::Result<()> {
    env_logger::init();

    let trainer = Trainer::default();
    println!("Training tokenizer...");
    let tokenizer = BpeTokenizer::from_trainer(&trainer, &TRAINING_TEXTS);
    println!(
        "Training complete! {} merges, {} tokens",
        tokenizer.merges().len(),
        tokenizer.vocabulary().len()
    );

    println!("\n=== Subword Tokenizer REPL ===");
    println!("Enter a sentence to tokenize (or \"quit\" to exit):");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;

        if input.trim().eq_ignore_ascii_case("quit") {
            println!("Bye");
            break;
        }

        if input.trim().is_empty() {
            println!("Please enter a sentence.");
            continue;
        }

        let details = tokenizer.encode_with_details(&input);

        println!("\nInput: {:?}", input);
        println!("Tokens:");
        for (index, detail) in details.iter().enumerate() {
            println!("  {}. {:?} (ID: {})", index + 1, detail.token, detail.id);
        }

        let ids: Vec<u32> = details.iter().map(|detail| detail.id).collect();
        println!("Token IDs: {:?}", ids);
        println!("Decoded: {}", tokenizer.decode(&ids));
    }

    Ok(())
}
