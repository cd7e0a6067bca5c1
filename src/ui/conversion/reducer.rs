use crate::ui::conversion::intent::ConversionIntent;
use crate::ui::conversion::state::ConversionState;
use crate::ui::mvi::Reducer;

pub struct ConversionReducer;

impl Reducer for ConversionReducer {
    type State = ConversionState;
    type Intent = ConversionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let result = match intent {
            ConversionIntent::SelectCategory { category } => state.set_category(&category),
            ConversionIntent::EditInput { text } => {
                state.set_input_text(text);
                Ok(())
            }
            ConversionIntent::SelectInputUnit { unit } => state.set_input_unit(unit),
            ConversionIntent::SelectOutputUnit { unit } => state.set_output_unit(unit),
        };

        // The UI only offers catalog entries; anything else leaves the state as is.
        if let Err(err) = result {
            tracing::warn!(error = %err, "Ignoring conversion intent");
        }
        state
    }
}
