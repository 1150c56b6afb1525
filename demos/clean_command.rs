//! Lex a command line, show the tokens, and print the cleaned result.

use cmdclean::{Cleaner, tokenize};

fn main() {
    let input = "grep --color=auto -e='a|b' \"my file\" && echo done";

    println!("Input: {input}");
    println!("Tokens:");
    for token in tokenize(input) {
        println!("  {token}");
    }

    let cleaner = Cleaner::new();
    println!("\nCleaned: {}", cleaner.clean(input));

    println!("\nTrace:");
    let traced = cleaner.clean_with("-n='v'", |step| println!("  {step}"));
    println!("Cleaned: {traced}");
}
