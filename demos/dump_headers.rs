use header_span::header::HeaderIndex;
use std::io::{self, ErrorKind, Read, Result};
use tracing::{info, instrument};

// Lets a block typed or piped with plain LF line ends be parsed.
fn to_crlf(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len() + raw.len() / 16);
    let mut prev = 0u8;
    for &b in raw {
        if b == b'\n' && prev != b'\r' {
            out.push(b'\r');
        }
        out.push(b);
        prev = b;
    }
    out
}

#[instrument(skip(block), fields(len = block.len()))]
fn dump(block: &[u8]) -> Result<()> {
    let idx = HeaderIndex::new(block);
    let count = idx
        .count()
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
    info!(count, "parsed header block");

    for hdr in &idx {
        let hdr = hdr.map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
        println!("{:>6}  {} =>{}", hdr.offset(), hdr.name, hdr.value);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut raw = Vec::new();
    io::stdin().read_to_end(&mut raw)?;
    dump(&to_crlf(&raw))
}
