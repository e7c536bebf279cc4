use mate_core::model::{Choice, Question, QuizPayload};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::AppError;

/// Build a quiz from the three image pools.
///
/// Both choice pools are shuffled; question `i` pairs the `i`-th correct image
/// with the `i`-th wrong one and puts the correct image on a random side.
///
/// # Errors
///
/// Returns `AppError::NotEnoughImages` if either choice pool has fewer than
/// `count` images or there is no ending image.
pub fn build_payload(
    mut correct: Vec<String>,
    mut wrong: Vec<String>,
    ending: &[String],
    count: usize,
    rng: &mut impl Rng,
) -> Result<QuizPayload, AppError> {
    if count == 0 || correct.len() < count || wrong.len() < count || ending.is_empty() {
        return Err(AppError::NotEnoughImages {
            correct: correct.len(),
            wrong: wrong.len(),
            ending: ending.len(),
        });
    }

    correct.shuffle(rng);
    wrong.shuffle(rng);

    let questions = correct
        .into_iter()
        .zip(wrong)
        .take(count)
        .map(|(right, decoy)| {
            if rng.random_bool(0.5) {
                Question::new(right, decoy, Choice::A)
            } else {
                Question::new(decoy, right, Choice::B)
            }
        })
        .collect();
    let ending_image = ending[rng.random_range(0..ending.len())].clone();

    Ok(QuizPayload::new(questions, ending_image)?)
}
