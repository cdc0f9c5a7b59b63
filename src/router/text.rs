//! Static response texts, kept verbatim-stable so /help and /pools can be
//! asserted on in tests.

pub const WELCOME_TEXT: &str = "Welcome to Saros LP Bot! Commands:\n\
/connectwallet <your_solana_pubkey>\n\
/pools\n\
/createposition <pool_address> <lower_price> <upper_price> <liquidity_amount>\n\
/addliquidity <pool_address> <amount_x> <amount_y>\n\
/removeliquidity <pool_address> <position_id> <remove_percentage>\n\
/monitor <pool_address>\n\
/unmonitor <pool_address>\n\
/help";

pub const HELP_TEXT: &str = "Saros LP Bot manages DLMM positions (demo; all transactions are mocked).\n\
1. Connect: /connectwallet <pubkey>\n\
2. List pools: /pools\n\
3. Create: /createposition <pool> <lower> <upper> <liquidity>\n\
4. Manage: /addliquidity, /removeliquidity\n\
5. Monitor: /monitor <pool>, stop with /unmonitor <pool>";

pub const POOLS_TEXT: &str = "Mock DLMM Pools (devnet limited; real pools via Saros explorer):\n\
1. Address: 9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin (SOL/USDC example)\n\
2. Address: 7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU (Mock pool for testing)";
