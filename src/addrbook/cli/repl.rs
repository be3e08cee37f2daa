use super::render::{write_banner, write_messages, write_prompt};
use addrbook::api::AddressBookApi;
use addrbook::commands::{CmdMessage, FAREWELL};
use addrbook::store::BookStore;
use std::io::{self, BufRead, Write};

/// Reads lines until `close`/`exit` or end of input.
pub(super) fn run<S, R, W>(mut api: AddressBookApi<S>, input: R, mut out: W) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    write_banner(&mut out)?;

    let mut lines = input.lines();
    loop {
        write_prompt(&mut out)?;

        let Some(line) = lines.next() else {
            tracing::debug!("end of input");
            writeln!(out)?;
            write_messages(&mut out, &[CmdMessage::info(FAREWELL)])?;
            return Ok(());
        };

        let result = api.execute(&line?);
        write_messages(&mut out, &result.messages)?;
        if result.exit {
            return Ok(());
        }
    }
}
