/// Height of one rendered listing card, in virtual pixels.
pub const CARD_HEIGHT_PX: f64 = 180.0;
/// Height of the virtual viewport, in virtual pixels.
pub const VIEWPORT_HEIGHT_PX: f64 = 720.0;
/// Distance moved by a bare `scroll` command.
pub const DEFAULT_SCROLL_STEP_PX: f64 = 360.0;

/// Characters of the company description shown before `details <n>` is needed.
pub const DETAILS_PREVIEW_CHARS: usize = 480;
/// Shown for a salary or experience range the catalog left empty.
pub const NOT_SPECIFIED: &str = "Not specified";

pub const NO_RESULTS_MESSAGE: &str =
    "No jobs found matching the selected criteria.\nPlease try different filters.";

pub const HELP_TEXT: &str = "\
commands:
  company <text>         company name contains <text> (empty to clear)
  location <text>        location contains <text> (empty to clear)
  remote <remote,on-site|->
  tech <stack,...|->     one or more of the offered tech stacks
  role <role,...|->      one or more of the offered roles
  salary <usd|->         minimum base pay (10..100, steps of 10)
  exp <years|->          minimum experience (0..10)
  clear                  reset every criterion
  scroll [px]            scroll down (negative scrolls up)
  bottom                 jump to the bottom of the list
  show                   print the current listing view
  details <n>            full description and apply link of job <n>
  help                   this text
  quit";
