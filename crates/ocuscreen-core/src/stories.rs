//! The fixed catalog of reading passages offered before recording.
//!
//! Passages only give the user something to read aloud while the camera
//! records; they play no part in scoring or analysis.

use crate::error::CoreError;
use crate::models::story::Story;

static CATALOG: [Story; 4] = [
    Story {
        id: "lighthouse",
        title: "The Lighthouse Keeper",
        description: "A calm coastal story with long, even sentences.",
        body: "Every evening the keeper climbed the one hundred and twelve steps \
               of the old lighthouse. He counted them aloud, as his father had, \
               and at the top he wiped the great lens with a soft cloth until it \
               shone. Ships he would never meet passed in the dark, guided by a \
               light he tended with patience. When the fog rolled in from the \
               sea, he wound the horn and listened to its low voice carry across \
               the water, and he felt that the whole coast was breathing with him.",
    },
    Story {
        id: "market",
        title: "Morning at the Market",
        description: "A lively scene full of colours and names.",
        body: "By six o'clock the square was already crowded. The baker stacked \
               round loaves beside jars of honey, the fishmonger shouted prices \
               over the clatter of crates, and a girl in a yellow coat sold \
               bunches of tulips from a bucket. Mr. Alvarez bought oranges for \
               his grandchildren and argued happily about the weather. Pigeons \
               gathered under the fountain, waiting for crumbs, while the church \
               bell rang the hour and the whole market seemed to pause and then \
               begin again.",
    },
    Story {
        id: "mountain",
        title: "The Mountain Path",
        description: "An adventure told in short, steady steps.",
        body: "The trail began in a pine forest and climbed slowly toward the \
               ridge. Maya kept a steady pace, breathing the cool air and \
               watching the light change between the trees. Near noon she \
               reached a meadow where wildflowers grew between grey stones. She \
               sat down, opened her water bottle, and looked back at the valley \
               far below. The river was a silver thread, the village only a \
               handful of roofs. She smiled, stood up, and continued toward the \
               summit.",
    },
    Story {
        id: "library",
        title: "The Quiet Library",
        description: "A reflective passage with a slower rhythm.",
        body: "The library closed at nine, but Thomas always stayed until the \
               last lamp was switched off. He liked the sound of pages turning \
               and the smell of old paper. Tonight he was reading about distant \
               stars, about light that had travelled for thousands of years \
               before reaching his window. When the librarian finally tapped \
               his shoulder, he closed the book gently, as if not to wake it, \
               and walked home under a sky that suddenly felt very close.",
    },
];

/// All stories, in display order.
pub fn catalog() -> &'static [Story] {
    &CATALOG
}

/// Look up a story by id.
pub fn get_story(id: &str) -> Option<&'static Story> {
    CATALOG.iter().find(|s| s.id == id)
}

pub fn require_story(id: &str) -> Result<&'static Story, CoreError> {
    get_story(id).ok_or_else(|| CoreError::UnknownStory(id.to_string()))
}
