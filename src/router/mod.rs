//! Slash-command routing.
//!
//! Commands live in one declarative table (`COMMANDS`): name, minimum arity,
//! usage string, handler. The router checks arity before anything else, so a
//! short `/addliquidity` gets its usage string back without ever touching the
//! wallet registry. Handlers are plain functions of (registry, chat, args)
//! returning a `Reply`; the Telegram layer decides how to deliver it.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::intent::MockIntent;
use crate::session::{SessionError, WalletRegistry};

mod text;

pub use text::{HELP_TEXT, POOLS_TEXT, WELCOME_TEXT};

/// What the router wants done in response to one command.
///
/// Most commands resolve to plain text. `/monitor` and `/unmonitor` also ask
/// the transport layer to start or stop a pool watch, which the router itself
/// cannot do (it holds no chain connection).
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Monitor { pool: Pubkey, ack: String },
    Unmonitor { pool: Pubkey, ack: String },
}

type Handler = fn(&WalletRegistry, i64, &[&str]) -> Reply;

pub struct CommandSpec {
    pub name: &'static str,
    pub min_args: usize,
    pub usage: &'static str,
    pub handler: Handler,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "start",
        min_args: 0,
        usage: "/start",
        handler: handle_start,
    },
    CommandSpec {
        name: "help",
        min_args: 0,
        usage: "/help",
        handler: handle_help,
    },
    CommandSpec {
        name: "connectwallet",
        min_args: 1,
        usage: "Usage: /connectwallet <your_solana_pubkey>",
        handler: handle_connect_wallet,
    },
    CommandSpec {
        name: "pools",
        min_args: 0,
        usage: "/pools",
        handler: handle_pools,
    },
    CommandSpec {
        name: "createposition",
        min_args: 4,
        usage: "Usage: /createposition <pool_address> <lower_price> <upper_price> <liquidity_amount>",
        handler: handle_create_position,
    },
    CommandSpec {
        name: "addliquidity",
        min_args: 3,
        usage: "Usage: /addliquidity <pool_address> <amount_x> <amount_y>",
        handler: handle_add_liquidity,
    },
    CommandSpec {
        name: "removeliquidity",
        min_args: 3,
        usage: "Usage: /removeliquidity <pool_address> <position_id> <remove_percentage> (0-100)",
        handler: handle_remove_liquidity,
    },
    CommandSpec {
        name: "monitor",
        min_args: 1,
        usage: "Usage: /monitor <pool_address>",
        handler: handle_monitor,
    },
    CommandSpec {
        name: "unmonitor",
        min_args: 1,
        usage: "Usage: /unmonitor <pool_address>",
        handler: handle_unmonitor,
    },
];

/// Splits a message into a command name and its argument tail.
///
/// Returns `None` for anything that is not a slash command. A trailing
/// `@botname` on the command is stripped so the bot works in group chats.
pub fn parse_command(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if !text.starts_with('/') {
        return None;
    }

    let mut parts = text.splitn(2, |c: char| c.is_whitespace());
    let cmd = parts.next()?.trim_start_matches('/');
    let args = parts.next().unwrap_or("").trim();
    let cmd = cmd.split('@').next()?;

    Some((cmd, args))
}

/// Resolves one incoming message to at most one `Reply`.
///
/// Non-command text gets `None` (the bot stays silent, matching the demo
/// behavior of only logging plain messages). An unrecognized slash command
/// gets a pointer to /help.
pub fn route(registry: &WalletRegistry, chat_id: i64, text: &str) -> Option<Reply> {
    let (name, tail) = parse_command(text)?;
    let args: Vec<&str> = tail.split_whitespace().collect();

    let spec = match COMMANDS.iter().find(|c| c.name == name) {
        Some(spec) => spec,
        None => {
            return Some(Reply::Text(format!(
                "Unknown command /{}. See /help for the command list.",
                name
            )))
        }
    };

    // Arity is checked strictly before any wallet lookup or address parsing.
    if args.len() < spec.min_args {
        return Some(Reply::Text(spec.usage.to_string()));
    }

    Some((spec.handler)(registry, chat_id, &args))
}

fn handle_start(_registry: &WalletRegistry, _chat_id: i64, _args: &[&str]) -> Reply {
    Reply::Text(WELCOME_TEXT.to_string())
}

fn handle_help(_registry: &WalletRegistry, _chat_id: i64, _args: &[&str]) -> Reply {
    Reply::Text(HELP_TEXT.to_string())
}

fn handle_connect_wallet(registry: &WalletRegistry, chat_id: i64, args: &[&str]) -> Reply {
    match registry.connect(chat_id, args[0]) {
        Ok(pubkey) => Reply::Text(format!(
            "Wallet connected: {}. Approve transactions in your wallet app.",
            pubkey
        )),
        Err(SessionError::InvalidAddress(raw)) => {
            Reply::Text(format!("Invalid pubkey: {}", raw))
        }
        Err(err) => Reply::Text(format!("Error connecting wallet: {}", err)),
    }
}

fn handle_pools(_registry: &WalletRegistry, _chat_id: i64, _args: &[&str]) -> Reply {
    Reply::Text(POOLS_TEXT.to_string())
}

/// Wallet gate shared by the liquidity commands. Arity has already been
/// checked by `route`, so a failure here is always "connect first".
fn connected_wallet(registry: &WalletRegistry, chat_id: i64) -> Result<Pubkey, Reply> {
    registry.get(chat_id).map_err(|err| match err {
        SessionError::NoWalletConnected(_) => {
            Reply::Text("No wallet connected. Use /connectwallet first.".to_string())
        }
        other => Reply::Text(format!("Error: {}", other)),
    })
}

fn parse_pool(raw: &str) -> Result<Pubkey, Reply> {
    Pubkey::from_str(raw).map_err(|_| Reply::Text(format!("Invalid pool address: {}", raw)))
}

fn mock_link_reply(intent: &MockIntent) -> Reply {
    Reply::Text(format!(
        "Mock transaction built for /{} (nothing is signed or broadcast):\n{}",
        intent.command,
        intent.deep_link()
    ))
}

fn handle_create_position(registry: &WalletRegistry, chat_id: i64, args: &[&str]) -> Reply {
    let _wallet = match connected_wallet(registry, chat_id) {
        Ok(wallet) => wallet,
        Err(reply) => return reply,
    };
    let pool = match parse_pool(args[0]) {
        Ok(pool) => pool,
        Err(reply) => return reply,
    };

    let intent = MockIntent::new(
        "createposition",
        &pool,
        &[
            ("lowerPrice", args[1]),
            ("upperPrice", args[2]),
            ("liquidity", args[3]),
        ],
    );
    mock_link_reply(&intent)
}

fn handle_add_liquidity(registry: &WalletRegistry, chat_id: i64, args: &[&str]) -> Reply {
    let _wallet = match connected_wallet(registry, chat_id) {
        Ok(wallet) => wallet,
        Err(reply) => return reply,
    };
    let pool = match parse_pool(args[0]) {
        Ok(pool) => pool,
        Err(reply) => return reply,
    };

    let intent = MockIntent::new(
        "addliquidity",
        &pool,
        &[("amountX", args[1]), ("amountY", args[2])],
    );
    mock_link_reply(&intent)
}

fn handle_remove_liquidity(registry: &WalletRegistry, chat_id: i64, args: &[&str]) -> Reply {
    let _wallet = match connected_wallet(registry, chat_id) {
        Ok(wallet) => wallet,
        Err(reply) => return reply,
    };
    let pool = match parse_pool(args[0]) {
        Ok(pool) => pool,
        Err(reply) => return reply,
    };

    let intent = MockIntent::new(
        "removeliquidity",
        &pool,
        &[("positionId", args[1]), ("percentage", args[2])],
    );
    mock_link_reply(&intent)
}

fn handle_monitor(_registry: &WalletRegistry, _chat_id: i64, args: &[&str]) -> Reply {
    match parse_pool(args[0]) {
        Ok(pool) => Reply::Monitor {
            pool,
            ack: format!("Monitoring {}.", pool),
        },
        Err(reply) => reply,
    }
}

fn handle_unmonitor(_registry: &WalletRegistry, _chat_id: i64, args: &[&str]) -> Reply {
    match parse_pool(args[0]) {
        Ok(pool) => Reply::Unmonitor {
            pool,
            ack: format!("Stopped monitoring {}.", pool),
        },
        Err(reply) => reply,
    }
}
