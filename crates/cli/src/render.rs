use ferrous_dig_application::use_cases::{AnswerData, LookupResult};
use std::io::{self, Write};
use tracing::debug;

/// Writes one line per address answer and returns how many were written.
///
/// IPv4 is rendered dotted-decimal, IPv6 as colon-separated hex groups.
pub fn render_answers(result: &LookupResult, out: &mut impl Write) -> io::Result<usize> {
    let mut printed = 0;
    for answer in &result.answers {
        match answer.data {
            AnswerData::Ipv4(ip) => writeln!(out, "{}", ip)?,
            AnswerData::Ipv6(ip) => writeln!(out, "{}", ip)?,
            AnswerData::Opaque { rtype, rdlength } => {
                debug!(rtype, rdlength, ttl = answer.ttl, "Skipping non-address answer");
                continue;
            }
        }
        printed += 1;
    }
    Ok(printed)
}
