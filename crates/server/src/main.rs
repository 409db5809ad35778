use std::io::Read;
use std::thread;

use anyhow::anyhow;
use clap::Parser;
use tiny_http::{Header, Request, Response, Server, StatusCode};

use server::{logging::setup_logging, route};

/// Serve the tokenize engine over HTTP.
#[derive(Parser)]
#[command(name = "tokenize-server", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "TOKLAB_BIND", default_value = "127.0.0.1:3030")]
    bind: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose, args.quiet)?;

    let server = Server::http(args.bind.as_str()).map_err(|e| anyhow!("failed to bind {}: {e}", args.bind))?;
    tracing::info!(bind = %args.bind, "server running");

    for request in server.incoming_requests() {
        // The engine holds no shared state, so requests are handled independently.
        thread::spawn(move || serve(request));
    }
    Ok(())
}

fn serve(mut req: Request) {
    let url = req.url().to_string();
    let method = req.method().to_string().to_ascii_uppercase();

    let mut body = String::new();
    if let Err(e) = req.as_reader().read_to_string(&mut body) {
        tracing::warn!(error = %e, %url, "failed to read request body");
        let _ = req.respond(Response::from_string("Bad Request").with_status_code(StatusCode(400)));
        return;
    }

    let reply = route(&method, &url, &body);
    tracing::info!(%method, %url, status = reply.status, "handled");

    let mut response = Response::from_string(reply.body).with_status_code(StatusCode(reply.status));
    let content_type: &[u8] = if reply.json { b"application/json" } else { b"text/plain; charset=utf-8" };
    for header in [
        Header::from_bytes(&b"Content-Type"[..], content_type),
        Header::from_bytes(&b"Access-Control-Allow-Origin"[..], &b"*"[..]),
    ]
    .into_iter()
    .flatten()
    {
        response.add_header(header);
    }
    if let Err(e) = req.respond(response) {
        tracing::warn!(error = %e, %url, "failed to send response");
    }
}
