use super::token::{Extension, TokenTable};

const BASIC_2_KEYWORDS: &[&str] = &[
    "END", "FOR", "NEXT", "DATA", "INPUT#", "INPUT", "DIM", "READ", // $80
    "LET", "GOTO", "RUN", "IF", "RESTORE", "GOSUB", "RETURN", "REM", // $88
    "STOP", "ON", "WAIT", "LOAD", "SAVE", "VERIFY", "DEF", "POKE", // $90
    "PRINT#", "PRINT", "CONT", "LIST", "CLR", "CMD", "SYS", "OPEN", // $98
    "CLOSE", "GET", "NEW", "TAB(", "TO", "FN", "SPC(", "THEN", // $A0
    "NOT", "STEP", "+", "-", "*", "/", "^", "AND", // $A8
    "OR", ">", "=", "<", "SGN", "INT", "ABS", "USR", // $B0
    "FRE", "POS", "SQR", "RND", "LOG", "EXP", "COS", "SIN", // $B8
    "TAN", "ATN", "PEEK", "LEN", "STR$", "VAL", "ASC", "CHR$", // $C0
    "LEFT$", "RIGHT$", "MID$", "GO", // $C8
];

// $FF is the pi character, which the ROM lists as a token.
const PI: &[&str] = &["{pi}"];

const BASIC_4_KEYWORDS: &[&str] = &[
    "CONCAT", "DOPEN", "DCLOSE", "RECORD", // $CC
    "HEADER", "COLLECT", "BACKUP", "COPY", "APPEND", "DSAVE", "DLOAD", "CATALOG", // $D0
    "RENAME", "SCRATCH", "DIRECTORY", // $D8
];

const SUPER_EXPANDER_KEYWORDS: &[&str] = &[
    "KEY", "GRAPHIC", "SCNCLR", "CIRCLE", // $CC
    "DRAW", "REGION", "COLOR", "POINT", "SOUND", "CHAR", "PAINT", "RPOT", // $D0
    "RPEN", "RSND", "RCOLR", "RGR", "RJOY", "RDOT", // $D8
];

const BASIC_35_KEYWORDS: &[&str] = &[
    "RGR", "RCLR", "RLUM", "JOY", // $CC
    "RDOT", "DEC", "HEX$", "ERR$", "INSTR", "ELSE", "RESUME", "TRAP", // $D0
    "TRON", "TROFF", "SOUND", "VOL", "AUTO", "PUDEF", "GRAPHIC", "PAINT", // $D8
    "CHAR", "BOX", "CIRCLE", "GSHAPE", "SSHAPE", "DRAW", "LOCATE", "COLOR", // $E0
    "SCNCLR", "SCALE", "HELP", "DO", "LOOP", "EXIT", "DIRECTORY", "DSAVE", // $E8
    "DLOAD", "HEADER", "SCRATCH", "COLLECT", "COPY", "RENAME", "BACKUP", "DELETE", // $F0
    "RENUMBER", "KEY", "MONITOR", "USING", "UNTIL", "WHILE", // $F8
];

const BASIC_7_FUNCTIONS: &[&str] = &[
    "POT", "BUMP", "PEN", "RSPPOS", "RSPRITE", "RSPCOLOR", // $CE $02
    "XOR", "RWINDOW", "POINTER", // $CE $08
];

const BASIC_7_STATEMENTS: &[&str] = &[
    "BANK", "FILTER", "PLAY", "TEMPO", "MOVSPR", "SPRITE", // $FE $02
    "SPRCOLOR", "RREG", "ENVELOPE", "SLEEP", "CATALOG", "DOPEN", "APPEND", "DCLOSE", // $FE $08
    "BSAVE", "BLOAD", "RECORD", "CONCAT", "DVERIFY", "DCLEAR", "SPRSAV", "COLLISION", // $FE $10
    "BEGIN", "BEND", "WINDOW", "BOOT", "WIDTH", "SPRDEF", "QUIT", "STASH", // $FE $18
    "", "FETCH", "", "SWAP", "OFF", "FAST", "SLOW", // $FE $20
];

const BASIC_71_STATEMENTS: &[&str] = &[
    "BANK", "FILTER", "PLAY", "TEMPO", "MOVSPR", "SPRITE", // $FE $02
    "SPRCOLOR", "RREG", "ENVELOPE", "SLEEP", "CATALOG", "DOPEN", "APPEND", "DCLOSE", // $FE $08
    "BSAVE", "BLOAD", "RECORD", "CONCAT", "DVERIFY", "DCLEAR", "SPRSAV", "COLLISION", // $FE $10
    "BEGIN", "BEND", "WINDOW", "BOOT", "WIDTH", "SPRDEF", "QUIT", "STASH", // $FE $18
    "", "FETCH", "", "SWAP", "OFF", "FAST", "SLOW", "CHANGE", // $FE $20
    "DUMP", "FIND", "MERGE", "MOVE", "PAGE", "SORT", // $FE $28
];

const FINAL_CARTRIDGE_3_KEYWORDS: &[&str] = &[
    "OFF", "AUTO", "DEL", "RENUM", // $CC
    "HELP", "FIND", "OLD", "DLOAD", "DVERIFY", "DSAVE", "APPEND", "DAPPEND", // $D0
    "DOS", "KILL", "MON", "PDIR", "PLIST", "BAR", "DESKTOP", "DUMP", // $D8
    "ARRAY", "MEM", "TRACE", "REPLACE", "ORDER", "PACK", "UNPACK", "MREAD", // $E0
    "MWRITE", // $E8
];

pub static BASIC_2: TokenTable = TokenTable {
    name: "BASIC 2.0",
    ranges: &[(0x80, BASIC_2_KEYWORDS), (0xFF, PI)],
    extensions: &[],
};

pub static BASIC_4: TokenTable = TokenTable {
    name: "BASIC 4.0",
    ranges: &[(0x80, BASIC_2_KEYWORDS), (0xCC, BASIC_4_KEYWORDS), (0xFF, PI)],
    extensions: &[],
};

pub static SUPER_EXPANDER: TokenTable = TokenTable {
    name: "VIC-20 Super Expander",
    ranges: &[
        (0x80, BASIC_2_KEYWORDS),
        (0xCC, SUPER_EXPANDER_KEYWORDS),
        (0xFF, PI),
    ],
    extensions: &[],
};

pub static BASIC_35: TokenTable = TokenTable {
    name: "BASIC 3.5",
    ranges: &[(0x80, BASIC_2_KEYWORDS), (0xCC, BASIC_35_KEYWORDS), (0xFF, PI)],
    extensions: &[],
};

pub static BASIC_7: TokenTable = TokenTable {
    name: "BASIC 7.0",
    ranges: &[(0x80, BASIC_2_KEYWORDS), (0xCC, BASIC_35_KEYWORDS), (0xFF, PI)],
    extensions: &[
        Extension {
            prefix: 0xCE,
            first: 0x02,
            keywords: BASIC_7_FUNCTIONS,
        },
        Extension {
            prefix: 0xFE,
            first: 0x02,
            keywords: BASIC_7_STATEMENTS,
        },
    ],
};

pub static BASIC_71: TokenTable = TokenTable {
    name: "BASIC 7.1",
    ranges: &[(0x80, BASIC_2_KEYWORDS), (0xCC, BASIC_35_KEYWORDS), (0xFF, PI)],
    extensions: &[
        Extension {
            prefix: 0xCE,
            first: 0x02,
            keywords: BASIC_7_FUNCTIONS,
        },
        Extension {
            prefix: 0xFE,
            first: 0x02,
            keywords: BASIC_71_STATEMENTS,
        },
    ],
};

pub static FINAL_CARTRIDGE_3: TokenTable = TokenTable {
    name: "Final Cartridge III",
    ranges: &[
        (0x80, BASIC_2_KEYWORDS),
        (0xCC, FINAL_CARTRIDGE_3_KEYWORDS),
        (0xFF, PI),
    ],
    extensions: &[],
};
