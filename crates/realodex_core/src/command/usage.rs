//! Command words and the usage text shown with syntax errors.

pub const ADD_WORD: &str = "add";
pub const DELETE_WORD: &str = "delete";
pub const EDIT_WORD: &str = "edit";
pub const FILTER_WORD: &str = "filter";
pub const LIST_WORD: &str = "list";
pub const SORT_WORD: &str = "sort";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const ADD_USAGE: &str = "add: Adds a client to Realodex.\n\
Parameters: n/NAME p/PHONE i/INCOME e/EMAIL a/ADDRESS f/FAMILY t/TAG [t/TAG] h/HOUSINGTYPE \
[r/REMARK] [b/BIRTHDAY]\n\
Example: add n/John Doe p/98765432 i/20000 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
f/4 t/buyer h/HDB r/Likes cats b/01May2009";

pub const DELETE_USAGE: &str = "delete: Deletes the client identified by the index number \
used in the displayed client list, or by their full name.\n\
Parameters: INDEX (must be a positive integer) or n/NAME\n\
Example: delete 1 or delete n/John Doe";

pub const EDIT_USAGE: &str = "edit: Edits the details of the client identified by the index \
number used in the displayed client list. Existing values are overwritten; given tags replace \
all existing tags.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [i/INCOME] [e/EMAIL] \
[a/ADDRESS] [f/FAMILY] [t/TAG]... [h/HOUSINGTYPE] [r/REMARK] [b/BIRTHDAY]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub const FILTER_USAGE: &str = "filter: Lists clients matching every given filter.\n\
Parameters: [n/KEYPHRASE] [r/KEYPHRASE] [t/TAG]... [h/HOUSINGTYPE] [b/MONTH] \
(at least one)\n\
Example: filter n/Alice t/buyer b/Jan";

pub const LIST_USAGE: &str = "list: Lists all clients.";

pub const SORT_USAGE: &str = "sort: Sorts all clients by days until their next birthday.";

pub const CLEAR_USAGE: &str = "clear: Deletes every client.";

pub const HELP_USAGE: &str = "help: Shows usage for every command.";

pub const EXIT_USAGE: &str = "exit: Exits Realodex.";

/// Every usage block, in the order `help` prints them.
pub fn help_message() -> String {
    [
        ADD_USAGE,
        DELETE_USAGE,
        EDIT_USAGE,
        FILTER_USAGE,
        LIST_USAGE,
        SORT_USAGE,
        CLEAR_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
    .join("\n\n")
}
