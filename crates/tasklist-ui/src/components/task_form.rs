use tasklist_core::accept_task_name;
use web_sys::{
  HtmlInputElement,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_submit: Callback<String>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        let Some(name) =
          accept_task_name(&draft)
        else {
          tracing::debug!(
            "ignoring empty task name"
          );
          return;
        };
        on_submit.emit(name.to_string());
        draft.set(String::new());
      }
    )
  };

  html! {
      <form onsubmit={on_submit}>
          <h2 class="label-wrapper">
              <label for="new-todo-input" class="label__lg">
                  { "What needs to be done?" }
              </label>
          </h2>
          <input
              type="text"
              id="new-todo-input"
              class="input input__lg"
              name="text"
              autocomplete="off"
              value={(*draft).clone()}
              oninput={on_input}
          />
          <button type="submit" class="btn btn__primary btn__lg">
              { "Add" }
          </button>
      </form>
  }
}
