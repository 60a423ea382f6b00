use tasklist_core::{
  FilterOption,
  TaskFilter
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::FilterButton;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub options:   Vec<FilterOption>,
  pub on_select: Callback<TaskFilter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <div class="filters btn-group stack-exception">
          {
              for props.options.iter().map(|option| html! {
                  <FilterButton
                      key={option.filter.name()}
                      filter={option.filter}
                      pressed={option.pressed}
                      on_select={props.on_select.clone()}
                  />
              })
          }
      </div>
  }
}
