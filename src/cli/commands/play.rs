//! Play command - interactive round against the computer

use anyhow::Result;
use clap::Args;

use crate::{Console, Session};

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Disable ANSI colors and screen clearing
    #[arg(long)]
    pub plain: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut console = Console::new(!args.plain);
    console.clear_screen();
    println!("[*] Welcome to Tic Tac Toe! [*]");

    let human = console.choose_mark()?;
    let (result, board) = {
        let mut session = Session::new(3, 3, human, &mut console);
        let result = session.run()?;
        (result, session.board().clone())
    };

    console.clear_screen();
    console.announce(result, human);
    print!("{}", console.draw(&board));

    Ok(())
}
