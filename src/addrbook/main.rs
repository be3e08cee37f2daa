mod cli;

fn main() {
    // Startup failures (unreadable data file, bad config) are reported, not fatal exits.
    if let Err(e) = cli::run() {
        println!("Error: {}", e);
    }
}
